use crate::domain::model::{OutputRecord, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// The four conversion stages. `extract` already applies the login filter.
pub trait Pipeline {
    fn extract(&self) -> Result<Extracted>;
    fn transform(&self, items: Vec<serde_json::Value>) -> TransformResult;
    fn load(&self, records: &[OutputRecord]) -> Result<String>;
}

#[derive(Debug, Clone, Default)]
pub struct Extracted {
    pub source_path: String,
    pub total_items: usize,
    pub logins: Vec<serde_json::Value>,
}
