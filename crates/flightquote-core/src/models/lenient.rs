//! Forgiving decoders for quotation payloads.
//!
//! The booking form posts every input as a string, while API clients post
//! numbers as numbers. Falsy values (empty strings, zero, `false`, `null`)
//! count as "not provided" so the document falls back to its placeholder.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        match self {
            Scalar::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Scalar::Number(n) => (n.as_f64() != Some(0.0)).then(|| n.to_string()),
            Scalar::Flag(true) => Some("true".to_string()),
            Scalar::Flag(false) => None,
        }
    }

    fn is_truthy(&self) -> bool {
        match self {
            Scalar::Flag(b) => *b,
            Scalar::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Scalar::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "on" | "yes" | "1"
            ),
        }
    }
}

/// Optional text field that also accepts numbers and booleans.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(raw.and_then(Scalar::into_text))
}

/// Checkbox-style flag: `true`, non-zero numbers and `"true"/"on"/"yes"/"1"`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(raw.is_some_and(|s| s.is_truthy()))
}

/// Treats an explicit `null` the same as a missing field.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
