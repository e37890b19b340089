use crate::core::{filter, loader, mapper, writer};
use crate::core::{ConfigProvider, Extracted, OutputRecord, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;

/// Bitwarden export in, Safari keychain CSV out.
pub struct KeychainPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> KeychainPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for KeychainPipeline<S, C> {
    fn extract(&self) -> Result<Extracted> {
        let items = loader::load_items(&self.storage, self.config.input_path())?;
        let total_items = items.len();
        let logins = filter::filter_logins(items);
        tracing::debug!("{} of {} items are logins", logins.len(), total_items);

        Ok(Extracted {
            source_path: self.config.input_path().to_string(),
            total_items,
            logins,
        })
    }

    fn transform(&self, items: Vec<serde_json::Value>) -> TransformResult {
        mapper::map_records(&items)
    }

    fn load(&self, records: &[OutputRecord]) -> Result<String> {
        let output_path = self.config.output_path();
        writer::write_csv(&self.storage, records, output_path)?;
        Ok(output_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ConvertError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .borrow_mut()
                .insert(path.to_string(), data.as_bytes().to_vec());
            storage
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.borrow().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                ConvertError::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
                )
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct Paths;

    impl ConfigProvider for Paths {
        fn input_path(&self) -> &str {
            "export.json"
        }

        fn output_path(&self) -> &str {
            "keychain.csv"
        }
    }

    #[test]
    fn test_extract_filters_logins() {
        let storage = MockStorage::with_file(
            "export.json",
            r#"{"items":[{"type":1,"name":"a"},{"type":2,"name":"n"},{"type":4,"name":"i"}]}"#,
        );
        let pipeline = KeychainPipeline::new(storage, Paths);

        let extracted = pipeline.extract().unwrap();
        assert_eq!(extracted.total_items, 3);
        assert_eq!(extracted.logins.len(), 1);
    }

    #[test]
    fn test_extract_missing_file() {
        let pipeline = KeychainPipeline::new(MockStorage::default(), Paths);
        assert!(matches!(
            pipeline.extract().unwrap_err(),
            ConvertError::NotFound { ref path } if path == "export.json"
        ));
    }

    #[test]
    fn test_load_writes_to_configured_output() {
        let pipeline = KeychainPipeline::new(MockStorage::with_file("export.json", "{}"), Paths);
        let extracted = pipeline.extract().unwrap();
        let result = pipeline.transform(extracted.logins);

        let output = pipeline.load(&result.records).unwrap();
        assert_eq!(output, "keychain.csv");

        let csv = pipeline.storage.get_file("keychain.csv").unwrap();
        assert_eq!(csv, b"Title,URL,Username,Password,Notes,OTPAuth\r\n");
    }
}
