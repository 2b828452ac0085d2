//! Error type shared by both widgets.
//!
//! Every variant is recoverable: the widget shows a toast and keeps its
//! previous state.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("Please upload a .md file (got '{name}')")]
    InvalidFile { name: String },

    #[error("Could not read file '{name}'")]
    UnreadableFile { name: String },

    #[error("Please enter exactly one Chinese character (got '{input}')")]
    InvalidTarget { input: String },

    #[error("Invalid settings: {0}")]
    InvalidConfig(String),

    #[error("Browser API failure: {0}")]
    Dom(String),
}

impl WidgetError {
    /// Short toast title for the variant.
    pub fn title(&self) -> &'static str {
        match self {
            WidgetError::InvalidFile { .. } => "Invalid File",
            WidgetError::UnreadableFile { .. } => "Upload Failed",
            WidgetError::InvalidTarget { .. } => "Invalid Character",
            WidgetError::InvalidConfig(_) => "Invalid Settings",
            WidgetError::Dom(_) => "Error",
        }
    }
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        WidgetError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let e = WidgetError::InvalidFile { name: "notes.txt".into() };
        assert!(e.to_string().contains("notes.txt"));
        assert_eq!(e.title(), "Invalid File");

        let e = WidgetError::InvalidTarget { input: "ab".into() };
        assert!(e.to_string().contains("ab"));
        assert_eq!(e.title(), "Invalid Character");
    }
}
