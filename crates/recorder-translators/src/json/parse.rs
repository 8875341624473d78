use super::fragment::{read_fragment, trim_json_whitespace};
use crate::error::TranslateError;
use recorder_core::{Command, CommandSequence};
use serde_json::Value;

/// Decodes a recording back into commands, preserving order.
///
/// Accepts what `append` and `generate` produce: an array of command
/// objects or a single command object. Blank text is not JSON and fails.
pub fn parse_sequence(text: &str) -> Result<CommandSequence, TranslateError> {
    if trim_json_whitespace(text).is_empty() {
        tracing::warn!("rejecting blank json command sequence");
        return Err(TranslateError::parse("sequence", "empty input"));
    }
    let objects = read_fragment(text, "sequence")
        .inspect_err(|error| tracing::warn!(%error, "rejecting json command sequence"))?
        .into_objects();

    let commands = objects
        .into_iter()
        .enumerate()
        .map(|(index, object)| {
            serde_json::from_value::<Command>(Value::Object(object)).map_err(|error| {
                TranslateError::parse("sequence", format!("element {index}: {error}"))
            })
        })
        .collect::<Result<CommandSequence, _>>()?;

    tracing::debug!(commands = commands.len(), "parsed json command sequence");
    Ok(commands)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
