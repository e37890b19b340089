pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;

pub use self::core::{etl::ConversionEngine, pipeline::KeychainPipeline};
pub use utils::error::{ConvertError, Result};
