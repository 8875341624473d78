mod error;
pub mod json;
mod options;
mod translator;

pub use error::{TranslateError, TranslateErrorKind};
pub use json::JsonTranslator;
pub use options::{load_translator_config, GenerateOptions, TranslatorConfig, TranslatorFormat};
pub use translator::{translator_for, ReversibleTranslator, Translator};
