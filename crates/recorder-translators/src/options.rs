use crate::error::TranslateError;
use crate::translator::{translator_for, Translator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-call generation settings shared by every output format.
///
/// Each translator reads only the fields it understands: `fluentnao` is the
/// robot object prefix used by scripting emitters and is ignored by JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_blocking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluentnao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyframe_duration: Option<f64>,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocking(mut self, is_blocking: bool) -> Self {
        self.is_blocking = Some(is_blocking);
        self
    }

    pub fn with_fluentnao(mut self, prefix: impl Into<String>) -> Self {
        self.fluentnao = Some(prefix.into());
        self
    }

    pub fn with_keyframe_duration(mut self, seconds: f64) -> Self {
        self.keyframe_duration = Some(seconds);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslatorFormat {
    #[default]
    Json,
}

impl TranslatorFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            TranslatorFormat::Json => "json",
        }
    }
}

impl fmt::Display for TranslatorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslatorFormat {
    type Err = TranslateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(TranslatorFormat::Json),
            other => Err(TranslateError::parse(
                "format",
                format!("unsupported translator format `{other}`"),
            )),
        }
    }
}

/// Output format plus default generation settings, as a host would store them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub format: TranslatorFormat,
    #[serde(default)]
    pub generate: GenerateOptions,
}

impl TranslatorConfig {
    pub fn build_translator(&self) -> Box<dyn Translator> {
        translator_for(self.format)
    }
}

/// Decodes a config from JSON or YAML text. Text opening with `{` is read as
/// JSON, anything else as YAML. Blank text yields the default config.
pub fn load_translator_config(input: &str) -> Result<TranslatorConfig, TranslateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(TranslatorConfig::default());
    }
    if trimmed.starts_with('{') {
        serde_json::from_str(trimmed)
            .map_err(|error| TranslateError::parse("config", format!("json decode error: {error}")))
    } else {
        serde_yaml::from_str(trimmed)
            .map_err(|error| TranslateError::parse("config", format!("yaml decode error: {error}")))
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
