use super::fragment::{read_fragment, trim_json_whitespace, Fragment};
use crate::error::TranslateError;

const LINE_BREAK: &str = "\r\n";

/// Appends `command` to the recording in `existing`.
///
/// Both inputs may be blank, a single command object, or an array of
/// command objects. Element text is spliced in as given (trimmed of JSON
/// whitespace) so numbers keep their original spelling.
pub fn append_command(existing: &str, command: &str) -> Result<String, TranslateError> {
    let existing_fragment = read_fragment(existing, "existing")?;
    let new_fragment = read_fragment(command, "new")?;

    if matches!(new_fragment, Fragment::Empty) {
        return Ok(trim_json_whitespace(existing).to_string());
    }

    let chunks = [
        element_chunk(&existing_fragment, existing, "existing")?,
        element_chunk(&new_fragment, command, "new")?,
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();

    tracing::debug!(chunks = chunks.len(), "appending json command");
    Ok(render_array(&chunks))
}

/// The comma-separated element list contributed by one input, if any.
fn element_chunk<'a>(
    fragment: &Fragment,
    text: &'a str,
    input: &'static str,
) -> Result<Option<&'a str>, TranslateError> {
    match fragment {
        Fragment::Empty => Ok(None),
        Fragment::Object(_) => Ok(Some(trim_json_whitespace(text))),
        Fragment::Array(objects) if objects.is_empty() => Ok(None),
        Fragment::Array(_) => trim_json_whitespace(text)
            .strip_prefix('[')
            .and_then(|body| body.strip_suffix(']'))
            .map(|body| Some(trim_json_whitespace(body)))
            .ok_or_else(|| TranslateError::parse(input, "array text is not bracketed")),
    }
}

fn render_array(chunks: &[&str]) -> String {
    if chunks.is_empty() {
        return "[]".to_string();
    }
    let separator = format!(",{LINE_BREAK}");
    format!("[{LINE_BREAK}{}{LINE_BREAK}]", chunks.join(separator.as_str()))
}

#[cfg(test)]
#[path = "append_test.rs"]
mod tests;
