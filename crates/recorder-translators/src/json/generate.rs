use crate::error::TranslateError;
use crate::options::GenerateOptions;
use recorder_core::{Command, JointSnapshot};

/// Encodes the changed joints of `snapshot` as one JSON object.
///
/// Returns `""` when no changed joint has an angle, whatever the options say.
/// `all_joint_names` and `options.fluentnao` do not affect the output.
pub fn generate_command(
    snapshot: &JointSnapshot,
    options: &GenerateOptions,
) -> Result<String, TranslateError> {
    let Some(command) = Command::from_snapshot(snapshot) else {
        tracing::debug!(
            changed = snapshot.changed_joint_names.len(),
            "no changed joint has an angle; nothing to generate"
        );
        return Ok(String::new());
    };

    let command = command
        .with_duration(options.keyframe_duration)
        .with_blocking(options.is_blocking);
    if let Some(field) = command.non_finite_field() {
        tracing::warn!(%field, "rejecting non-finite number");
        return Err(TranslateError::Serialization(format!(
            "`{field}` is not a finite number"
        )));
    }

    let encoded = serde_json::to_string(&command)
        .map_err(|error| TranslateError::Serialization(error.to_string()))?;
    tracing::debug!(
        joints = command.changes.len(),
        duration = ?command.duration,
        is_blocking = ?command.is_blocking,
        "generated json command"
    );
    Ok(encoded)
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
