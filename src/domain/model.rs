use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Column names Safari expects, in order.
pub const KEYCHAIN_HEADER: [&str; 6] = ["Title", "URL", "Username", "Password", "Notes", "OTPAuth"];

/// Text of a JSON value as it lands in a CSV cell. `null` is empty, strings
/// are taken as-is, other scalars are stringified and containers keep their
/// JSON text.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A scalar field of the export that accepts any JSON value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellText(pub String);

impl<'de> Deserialize<'de> for CellText {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(CellText(cell_text(&value)))
    }
}

/// One entry of a Bitwarden export `items` array. Only the parts the
/// keychain needs are modelled; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceRecord {
    pub name: CellText,
    pub notes: CellText,
    pub login: Option<LoginData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginData {
    pub username: CellText,
    pub password: CellText,
    pub totp: CellText,
    // Kept raw: anything but a list of objects only empties the URL.
    pub uris: Option<Value>,
}

impl LoginData {
    pub fn first_uri(&self) -> String {
        self.uris
            .as_ref()
            .and_then(Value::as_array)
            .and_then(|uris| uris.first())
            .and_then(Value::as_object)
            .and_then(|entry| entry.get("uri"))
            .map(cell_text)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "OTPAuth")]
    pub otp_auth: String,
}

impl From<SourceRecord> for OutputRecord {
    fn from(record: SourceRecord) -> Self {
        let login = record.login.unwrap_or_default();
        Self {
            title: record.name.0,
            url: login.first_uri(),
            username: login.username.0,
            password: login.password.0,
            notes: record.notes.0,
            otp_auth: login.totp.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub records: Vec<OutputRecord>,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub total_items: usize,
    pub login_items: usize,
    pub written: usize,
    pub skipped: Vec<SkippedRecord>,
    pub input_path: String,
    pub output_path: String,
}
