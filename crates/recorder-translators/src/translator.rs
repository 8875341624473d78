use crate::error::TranslateError;
use crate::json::JsonTranslator;
use crate::options::{GenerateOptions, TranslatorFormat};
use recorder_core::{CommandSequence, JointSnapshot};

/// An output format for recorded joint motion.
pub trait Translator: Send + Sync {
    fn format(&self) -> TranslatorFormat;

    /// Encodes one recorded step. Returns an empty string when nothing changed.
    fn generate(
        &self,
        snapshot: &JointSnapshot,
        options: &GenerateOptions,
    ) -> Result<String, TranslateError>;

    /// Adds `command` (output of [`Translator::generate`]) after the code in `existing`.
    fn append(&self, existing: &str, command: &str) -> Result<String, TranslateError>;

    /// `Some` for formats whose generated text can be read back into commands.
    fn as_reversible(&self) -> Option<&dyn ReversibleTranslator> {
        None
    }

    fn is_reversible(&self) -> bool {
        self.as_reversible().is_some()
    }
}

pub trait ReversibleTranslator: Translator {
    fn parse(&self, sequence: &str) -> Result<CommandSequence, TranslateError>;
}

pub fn translator_for(format: TranslatorFormat) -> Box<dyn Translator> {
    match format {
        TranslatorFormat::Json => Box::new(JsonTranslator::new()),
    }
}

#[cfg(test)]
#[path = "translator_test.rs"]
mod tests;
