pub mod etl;
pub mod filter;
pub mod loader;
pub mod mapper;
pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{
    ConversionSummary, OutputRecord, SkippedRecord, SourceRecord, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Extracted, Pipeline, Storage};
pub use crate::utils::error::Result;
