use crate::core::Storage;
use crate::utils::error::{ConvertError, Result};
use serde_json::Value;

/// Reads a Bitwarden export and returns the raw entries of its `items` array.
/// A missing or `null` `items` key yields an empty list.
pub fn load_items<S: Storage>(storage: &S, path: &str) -> Result<Vec<Value>> {
    let data = storage.read_file(path)?;
    tracing::debug!("Read {} bytes from {}", data.len(), path);
    parse_items(path, &data)
}

pub fn parse_items(path: &str, data: &[u8]) -> Result<Vec<Value>> {
    let document: Value = serde_json::from_slice(data).map_err(|source| ConvertError::Format {
        path: path.to_string(),
        source,
    })?;

    let Value::Object(mut root) = document else {
        return Err(ConvertError::Layout {
            path: path.to_string(),
            message: "top-level value is not an object".to_string(),
        });
    };

    match root.remove("items") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ConvertError::Layout {
            path: path.to_string(),
            message: "'items' is not an array".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_returns_items_array() {
        let items = parse_items("a.json", br#"{"encrypted":false,"items":[{"type":1},{"type":2}]}"#)
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["type"], 2);
    }

    #[test]
    fn test_parse_items_missing_key_is_empty() {
        assert!(parse_items("a.json", br#"{"folders":[]}"#).unwrap().is_empty());
        assert!(parse_items("a.json", br#"{"items":null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_items_rejects_invalid_json() {
        let err = parse_items("a.json", b"{not valid json").unwrap_err();
        assert!(matches!(err, ConvertError::Format { .. }));
        assert!(err.user_friendly_message().contains("Invalid JSON file format"));
    }

    #[test]
    fn test_parse_items_rejects_wrong_layout() {
        assert!(matches!(
            parse_items("a.json", b"[1,2,3]").unwrap_err(),
            ConvertError::Layout { .. }
        ));
        assert!(matches!(
            parse_items("a.json", br#"{"items":{"type":1}}"#).unwrap_err(),
            ConvertError::Layout { .. }
        ));
    }
}
