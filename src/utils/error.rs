use crate::domain::model::SkippedRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("File '{path}' not found")]
    NotFound { path: String },

    #[error("Invalid JSON file format in '{path}': {source}")]
    Format {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected export layout in '{path}': {message}")]
    Layout { path: String, message: String },

    #[error("IO error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Error processing item '{name}': {reason}")]
    Record { name: String, reason: String },
}

impl ConvertError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ConvertError::NotFound { path }
        } else {
            ConvertError::Io { path, source }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::NotFound { path } => format!("Error: File '{}' not found", path),
            ConvertError::Format { source, .. } => {
                format!("Error: Invalid JSON file format - {}", source)
            }
            ConvertError::Layout { message, .. } => {
                format!("Error: Invalid JSON file format - {}", message)
            }
            ConvertError::Io { path, source } => {
                format!("Error: Failed to access '{}' - {}", path, source)
            }
            ConvertError::Csv(e) => format!("Error: Failed to write output file - {}", e),
            ConvertError::InvalidArgument { .. } => format!("Error: {}", self),
            ConvertError::Record { .. } => format!("Warning: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::NotFound { .. } => {
                "Check the path of the Bitwarden export (Tools > Export vault > .json)"
            }
            ConvertError::Format { .. } | ConvertError::Layout { .. } => {
                "Export the vault again as unencrypted JSON; encrypted exports are not supported"
            }
            ConvertError::Io { .. } | ConvertError::Csv(_) => {
                "Check file permissions and free disk space for the output location"
            }
            ConvertError::InvalidArgument { .. } => "Run with --help to see the expected arguments",
            ConvertError::Record { .. } => "Fix or re-enter this item in Bitwarden and export again",
        }
    }
}

impl From<SkippedRecord> for ConvertError {
    fn from(skipped: SkippedRecord) -> Self {
        ConvertError::Record {
            name: skipped.name,
            reason: skipped.reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
