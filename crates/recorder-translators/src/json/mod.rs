//! Reversible JSON keyframe format.
//!
//! A step encodes as `{"changes": {...}, "duration": f, "is_blocking": b}`;
//! a recording is a JSON array of those objects.

mod append;
mod fragment;
mod generate;
mod parse;

use crate::error::TranslateError;
use crate::options::{GenerateOptions, TranslatorFormat};
use crate::translator::{ReversibleTranslator, Translator};
use recorder_core::{CommandSequence, JointSnapshot};

pub use append::append_command;
pub use generate::generate_command;
pub use parse::parse_sequence;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonTranslator;

impl JsonTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl Translator for JsonTranslator {
    fn format(&self) -> TranslatorFormat {
        TranslatorFormat::Json
    }

    fn generate(
        &self,
        snapshot: &JointSnapshot,
        options: &GenerateOptions,
    ) -> Result<String, TranslateError> {
        generate_command(snapshot, options)
    }

    fn append(&self, existing: &str, command: &str) -> Result<String, TranslateError> {
        append_command(existing, command)
    }

    fn as_reversible(&self) -> Option<&dyn ReversibleTranslator> {
        Some(self)
    }
}

impl ReversibleTranslator for JsonTranslator {
    fn parse(&self, sequence: &str) -> Result<CommandSequence, TranslateError> {
        parse_sequence(sequence)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
