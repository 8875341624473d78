use crate::joints::{JointAngleMap, JointSnapshot};
use serde::{Deserialize, Serialize};

/// A keyframe: the joints that moved, plus optional timing and blocking hints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Command {
    #[serde(default)]
    pub changes: JointAngleMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_blocking: Option<bool>,
}

impl Command {
    /// Returns `None` when no changed joint has a known angle.
    pub fn from_snapshot(snapshot: &JointSnapshot) -> Option<Self> {
        let changes = snapshot.effective_changes();
        if changes.is_empty() {
            return None;
        }
        Some(Self {
            changes,
            ..Self::default()
        })
    }

    pub fn with_duration(mut self, duration: Option<f64>) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_blocking(mut self, is_blocking: Option<bool>) -> Self {
        self.is_blocking = is_blocking;
        self
    }

    pub fn apply_to(&self, pose: &mut JointAngleMap) {
        for (joint, angle) in &self.changes {
            pose.insert(joint.clone(), *angle);
        }
    }

    /// Path of the first NaN or infinite number, e.g. `changes.HeadYaw`.
    pub fn non_finite_field(&self) -> Option<String> {
        if let Some((joint, _)) = self.changes.iter().find(|(_, angle)| !angle.is_finite()) {
            return Some(format!("changes.{joint}"));
        }
        match self.duration {
            Some(duration) if !duration.is_finite() => Some("duration".to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandSequence {
    commands: Vec<Command>,
}

impl CommandSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    /// Pose reached after applying every command to `initial`, in order.
    pub fn replay(&self, initial: JointAngleMap) -> JointAngleMap {
        self.commands.iter().fold(initial, |mut pose, command| {
            command.apply_to(&mut pose);
            pose
        })
    }

    /// Sum of the durations that are present; commands without one count as zero.
    pub fn total_duration(&self) -> f64 {
        self.commands.iter().filter_map(|command| command.duration).sum()
    }
}

impl From<Vec<Command>> for CommandSequence {
    fn from(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

impl FromIterator<Command> for CommandSequence {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CommandSequence {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a CommandSequence {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;
