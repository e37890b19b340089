use bw2keychain::utils::{logger, validation::Validate};
use bw2keychain::{CliConfig, ConversionEngine, KeychainPipeline, LocalStorage};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger();
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let pipeline = KeychainPipeline::new(LocalStorage::new(), config);
    let engine = ConversionEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::debug!(
                "{} items in export, {} rows written to {}",
                summary.total_items,
                summary.written,
                summary.output_path
            );
        }
        Err(e) => {
            tracing::debug!("Conversion failed: {:?}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Hint: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
