//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for running an export, whatever drives it.
//!
//! It:
//! - **Dispatches** to the command functions in `commands/*.rs`
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not print, format messages, or decide where the database comes
//! from. Those belong to the caller.
//!
//! ## Generic Over DatabaseSource
//!
//! `ExportApi<S: DatabaseSource>` is generic over where the database is read:
//! - Production: `ExportApi<FileSource>`
//! - Testing: `ExportApi<InMemorySource>`

use crate::commands;
use crate::error::Result;
use crate::store::DatabaseSource;

pub use crate::commands::export::{output_path, Destination, ExportRequest, DEFAULT_OUTPUT_STEM};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::enrich::SnippetFilter;
pub use crate::render::OutputFormat;

/// The main API facade for export operations.
pub struct ExportApi<S: DatabaseSource> {
    source: S,
}

impl<S: DatabaseSource> ExportApi<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn export(&self, request: &ExportRequest) -> Result<CmdResult> {
        commands::export::run(&self.source, request)
    }
}
