use crate::utils::error::{ConvertError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ConvertError::InvalidArgument {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidArgument {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects an output path that would overwrite the export being read.
pub fn validate_distinct_paths(input: &str, output: &str) -> Result<()> {
    let same = match (Path::new(input).canonicalize(), Path::new(output).canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => Path::new(input) == Path::new(output),
    };

    if same {
        return Err(ConvertError::InvalidArgument {
            field: "output_path".to_string(),
            value: output.to_string(),
            reason: "Output path must differ from the input path".to_string(),
        });
    }
    Ok(())
}
