//! Serde helpers for drafts: cells arrive as JSON numbers or strings and are kept as text until
//! the model editors parse them.

use serde::de::Deserializer;
use serde::Deserialize;
use serde_json::Value;

pub(crate) fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

pub(crate) fn text_field<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?))
}

pub(crate) fn text_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    Ok(Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(value_text)
        .collect())
}

pub(crate) fn text_rows<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<Vec<String>>, D::Error> {
    Ok(Vec::<Vec<Value>>::deserialize(deserializer)?
        .into_iter()
        .map(|row| row.into_iter().map(value_text).collect())
        .collect())
}
