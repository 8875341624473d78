use crate::error::TranslateError;
use serde_json::{Map, Value};

/// Top-level shape accepted by `append` and `parse`.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Fragment {
    Empty,
    Object(Map<String, Value>),
    Array(Vec<Map<String, Value>>),
}

impl Fragment {
    pub(super) fn into_objects(self) -> Vec<Map<String, Value>> {
        match self {
            Fragment::Empty => Vec::new(),
            Fragment::Object(object) => vec![object],
            Fragment::Array(objects) => objects,
        }
    }
}

/// Strips the four whitespace characters JSON allows between tokens.
pub(super) fn trim_json_whitespace(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
}

/// Blank text is `Empty`; anything else must be an object or an array of objects.
pub(super) fn read_fragment(text: &str, input: &'static str) -> Result<Fragment, TranslateError> {
    let trimmed = trim_json_whitespace(text);
    if trimmed.is_empty() {
        return Ok(Fragment::Empty);
    }

    let value = serde_json::from_str::<Value>(trimmed)
        .map_err(|error| TranslateError::parse(input, format!("invalid json: {error}")))?;
    match value {
        Value::Object(object) => Ok(Fragment::Object(object)),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(object) => Ok(object),
                other => Err(TranslateError::parse(
                    input,
                    format!("element {index} must be an object, found {}", type_name(&other)),
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Fragment::Array),
        other => Err(TranslateError::parse(
            input,
            format!(
                "top level must be an object or array of objects, found {}",
                type_name(&other)
            ),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "fragment_test.rs"]
mod tests;
