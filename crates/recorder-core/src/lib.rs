pub mod command;
pub mod joints;
pub mod logging;

pub use command::{Command, CommandSequence};
pub use joints::{ChangedJointSet, JointAngleMap, JointSnapshot};
pub use logging::{init as init_logging, Profile};
