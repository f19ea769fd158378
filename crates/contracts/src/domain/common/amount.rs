//! Decimal amounts arrive either as JSON numbers or as decimal strings
//! (`"12.50"`), depending on how the service serializes its columns.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// serde `deserialize_with` helper accepting `12.5` and `"12.5"`
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(v) => Ok(v),
        RawAmount::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid amount '{}': {}", s, e))),
    }
}
