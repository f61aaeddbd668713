use crate::commands::{CmdMessage, CmdResult};
use crate::enrich::{enrich, SnippetFilter};
use crate::error::{ExportError, Result};
use crate::folders::FolderPathMap;
use crate::render::{self, OutputFormat};
use crate::store::DatabaseSource;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_OUTPUT_STEM: &str = "mass_code_export";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: OutputFormat,
    pub destination: Destination,
    pub filter: SnippetFilter,
    pub use_color: bool,
}

impl ExportRequest {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            destination: Destination::Stdout,
            filter: SnippetFilter::default(),
            use_color: false,
        }
    }

    pub fn to_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination = Destination::File(path.into());
        self
    }

    pub fn with_filter(mut self, filter: SnippetFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }
}

/// Replaces whatever extension `stem` carries with the one for `format`.
pub fn output_path(stem: impl AsRef<Path>, format: OutputFormat) -> PathBuf {
    stem.as_ref().with_extension(format.extension())
}

pub fn run<S: DatabaseSource>(source: &S, request: &ExportRequest) -> Result<CmdResult> {
    // 1. Decode
    let db = source.load()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Parsed massCode database successfully"));
    result.add_message(CmdMessage::info(format!(
        "Found {} folders and {} snippets",
        db.folders.len(),
        db.snippets.len()
    )));

    // 2. Resolve folder paths and enrich
    let folders = FolderPathMap::build(&db.folders);
    for id in folders.cyclic() {
        result.add_message(CmdMessage::warning(format!(
            "Folder '{}' has a parent chain that loops, path truncated to '{}'",
            id,
            folders.get(id).unwrap_or_default()
        )));
    }
    let data = enrich(&db.snippets, &folders, &db.tags, request.filter);
    debug!(
        source = %source.describe(),
        folders = folders.len(),
        exported = data.snippets.len(),
        "pipeline complete"
    );

    // 3. Render, then deliver. Nothing is written unless rendering succeeded.
    let output = render::render(&data, request.format, request.use_color)?;
    let result = result.with_counts(db.folders.len(), db.snippets.len(), data.snippets.len());

    match &request.destination {
        Destination::Stdout => Ok(result.with_output(output)),
        Destination::File(path) => {
            fs::write(path, output).map_err(ExportError::Io)?;
            info!(path = %path.display(), format = %request.format, "export written");
            let mut result = result.with_output_path(path.clone());
            result.add_message(CmdMessage::success(format!(
                "Results exported to {}",
                path.display()
            )));
            Ok(result)
        }
    }
}
