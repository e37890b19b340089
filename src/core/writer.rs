use crate::core::Storage;
use crate::domain::model::{OutputRecord, KEYCHAIN_HEADER};
use crate::utils::error::{ConvertError, Result};

/// Renders the keychain CSV. The header row is written even with no records.
pub fn render_csv(records: &[OutputRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(KEYCHAIN_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| ConvertError::Io {
            path: "<csv buffer>".to_string(),
            source: std::io::Error::new(e.error().kind(), e.error().to_string()),
        })
}

pub fn write_csv<S: Storage>(storage: &S, records: &[OutputRecord], path: &str) -> Result<()> {
    let data = render_csv(records)?;
    tracing::debug!("Writing {} rows ({} bytes) to {}", records.len(), data.len(), path);
    storage.write_file(path, &data)
}
