#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateErrorKind {
    Parse,
    Serialization,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("parse `{input}` failed: {reason}")]
    Parse { input: &'static str, reason: String },
    #[error("serialize command failed: {0}")]
    Serialization(String),
}

impl TranslateError {
    pub(crate) fn parse(input: &'static str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> TranslateErrorKind {
        match self {
            Self::Parse { .. } => TranslateErrorKind::Parse,
            Self::Serialization(_) => TranslateErrorKind::Serialization,
        }
    }
}
