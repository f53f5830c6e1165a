//! Command handlers

pub mod config;
pub mod entry;
pub mod import;
pub mod section;
pub mod status;

use anyhow::{bail, Result};
use serde_json::{Map, Value};

/// Parse `key=value` pairs into a JSON object of string fields
pub fn parse_fields(fields: &[String]) -> Result<Map<String, Value>> {
    let mut map = Map::new();
    for field in fields {
        match field.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                map.insert(
                    key.trim().to_string(),
                    Value::String(value.to_string()),
                );
            }
            _ => bail!("Invalid field '{}'. Expected key=value.", field),
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields() {
        let map = parse_fields(&[
            "question=Do I need my own bike?".to_string(),
            "answer=Rentals are included.".to_string(),
        ])
        .unwrap();
        assert_eq!(map["question"], "Do I need my own bike?");
        assert_eq!(map["answer"], "Rentals are included.");
    }

    #[test]
    fn test_parse_fields_keeps_equals_in_value() {
        let map = parse_fields(&["url=https://a.com/?q=1".to_string()]).unwrap();
        assert_eq!(map["url"], "https://a.com/?q=1");
    }

    #[test]
    fn test_parse_fields_rejects_missing_separator() {
        assert!(parse_fields(&["no-separator".to_string()]).is_err());
        assert!(parse_fields(&["=value".to_string()]).is_err());
    }
}
