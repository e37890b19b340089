pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "bw2keychain", version)]
#[command(about = "Convert Bitwarden JSON export to iCloud Keychain CSV format")]
#[command(
    after_help = "WARNING: Output file will contain sensitive data. Handle with care and delete after import."
)]
pub struct CliConfig {
    #[arg(help = "Bitwarden JSON export file")]
    pub input_path: String,

    #[arg(help = "Output CSV file for iCloud Keychain")]
    pub output_path: String,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_distinct_paths(&self.input_path, &self.output_path)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_paths() {
        let config = CliConfig::try_parse_from(["bw2keychain", "export.json", "out.csv"]).unwrap();
        assert_eq!(config.input_path(), "export.json");
        assert_eq!(config.output_path(), "out.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_both_paths_required() {
        assert!(CliConfig::try_parse_from(["bw2keychain", "export.json"]).is_err());
        assert!(CliConfig::try_parse_from(["bw2keychain", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_same_input_and_output_rejected() {
        let config = CliConfig::try_parse_from(["bw2keychain", "vault.json", "vault.json"]).unwrap();
        assert!(config.validate().is_err());
    }
}
