use crate::core::{ConversionSummary, Pipeline};
use crate::utils::error::{ConvertError, Result};

pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ConversionSummary> {
        println!("Reading Bitwarden export file...");
        let extracted = self.pipeline.extract()?;

        println!("Converting {} login items...", extracted.logins.len());
        let login_items = extracted.logins.len();
        let result = self.pipeline.transform(extracted.logins);
        for skipped in &result.skipped {
            eprintln!("{}", ConvertError::from(skipped.clone()).user_friendly_message());
        }

        println!("Writing CSV file...");
        let output_path = self.pipeline.load(&result.records)?;

        let summary = ConversionSummary {
            total_items: extracted.total_items,
            login_items,
            written: result.records.len(),
            skipped: result.skipped,
            input_path: extracted.source_path,
            output_path,
        };
        tracing::info!(
            "Converted {} of {} login items ({} skipped)",
            summary.written,
            summary.login_items,
            summary.skipped.len()
        );

        println!("\nConversion complete!");
        println!("{}", security_reminder(&summary.input_path, &summary.output_path));

        Ok(summary)
    }
}

/// Post-run instructions. Both files hold plaintext credentials.
pub fn security_reminder(input_path: &str, output_path: &str) -> String {
    format!(
        "\nIMPORTANT:\n\
         1. Import the CSV file into Safari (File > Import From > CSV file...)\n\
         2. After importing, securely delete both the JSON and CSV files:\n   \
         rm -P {} {}",
        input_path, output_path
    )
}
