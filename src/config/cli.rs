use crate::core::Storage;
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::Path;

/// Plain filesystem access; paths are used as given.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| ConvertError::io(path, e))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ConvertError::Io {
                    path: path.to_string(),
                    source,
                })?;
            }
        }

        fs::write(path, data).map_err(|source| ConvertError::Io {
            path: path.to_string(),
            source,
        })
    }
}
