//! # Rendering
//!
//! Turns [`OutputData`] into one of the three export formats. All formats carry
//! the same snippets, in the same order, with the same field values:
//!
//! - [`text`]: human-readable listing, one block per snippet
//! - [`html`]: static page with the data embedded for client-side search
//! - [`json`]: indented JSON mirroring [`OutputData`]
//!
//! Text and HTML go through minijinja templates embedded in the binary (see
//! [`templates`]). Layout decisions that need exact control, like the
//! separator width or escaping the embedded JSON, stay in Rust and are passed
//! to the templates as ready-made values.

use crate::error::{ExportError, Result};
use crate::model::OutputData;
use std::fmt;
use std::str::FromStr;

pub mod html;
pub mod json;
pub mod styles;
pub mod templates;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Html, OutputFormat::Json];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }

    /// File extension used when the export is written to disk.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| ExportError::UnsupportedFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders `data` in `format`. `use_color` only affects text output.
pub fn render(data: &OutputData, format: OutputFormat, use_color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(data, use_color),
        OutputFormat::Html => html::render(data),
        OutputFormat::Json => json::render(data),
    }
}

pub(crate) fn template_error(err: minijinja::Error) -> ExportError {
    ExportError::Template(err.to_string())
}
