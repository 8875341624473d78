use std::collections::{BTreeMap, BTreeSet};

/// Joint name to angle in radians. Sorted so encoded output is deterministic.
pub type JointAngleMap = BTreeMap<String, f64>;

/// Joint names whose angle moved in the current step.
pub type ChangedJointSet = BTreeSet<String>;

/// One recorded step of robot joint state, as handed to a translator.
///
/// `all_joint_names` is the set of joints the recorder is tracking. Formats
/// that emit every enabled joint read it; the JSON format only emits
/// `changed_joint_names` that also have an angle in `joint_values`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JointSnapshot {
    pub joint_values: JointAngleMap,
    pub all_joint_names: BTreeSet<String>,
    pub changed_joint_names: ChangedJointSet,
}

impl JointSnapshot {
    pub fn new(
        joint_values: JointAngleMap,
        all_joint_names: impl IntoIterator<Item = String>,
        changed_joint_names: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            joint_values,
            all_joint_names: all_joint_names.into_iter().collect(),
            changed_joint_names: changed_joint_names.into_iter().collect(),
        }
    }

    /// Snapshot where the tracked joints are exactly the changed ones.
    pub fn from_changes<N>(
        joint_values: JointAngleMap,
        changed: impl IntoIterator<Item = N>,
    ) -> Self
    where
        N: Into<String>,
    {
        let changed_joint_names = changed.into_iter().map(Into::into).collect::<ChangedJointSet>();
        Self {
            joint_values,
            all_joint_names: changed_joint_names.clone(),
            changed_joint_names,
        }
    }

    /// Angles of `changed_joint_names ∩ keys(joint_values)`.
    pub fn effective_changes(&self) -> JointAngleMap {
        self.changed_joint_names
            .iter()
            .filter_map(|name| {
                self.joint_values
                    .get(name)
                    .map(|angle| (name.clone(), *angle))
            })
            .collect()
    }

    pub fn has_changes(&self) -> bool {
        self.changed_joint_names
            .iter()
            .any(|name| self.joint_values.contains_key(name))
    }
}

#[cfg(test)]
#[path = "joints_test.rs"]
mod tests;
