//! # Snippet Enrichment
//!
//! Joins each [`Snippet`] against the resolved folder paths and the tag names to
//! produce the [`SnippetOutput`] records every renderer consumes.
//!
//! Resolution never fails. A snippet whose folder cannot be resolved is filed
//! under [`UNCATEGORIZED`]; a tag identifier with no matching tag becomes
//! [`UNKNOWN_TAG`]. Tags are resolved one-to-one so the output keeps the
//! count and order of the snippet's `tagsIds`.

use crate::folders::FolderPathMap;
use crate::model::{OutputData, Snippet, SnippetOutput, Tag};
use std::collections::HashMap;
use tracing::debug;

pub const UNCATEGORIZED: &str = "Un-categorized";
pub const UNKNOWN_TAG: &str = "Unknown Tag";

/// Which snippets make it into the export. The default keeps everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnippetFilter {
    pub exclude_deleted: bool,
    pub favorites_only: bool,
}

impl SnippetFilter {
    pub fn accepts(&self, snippet: &Snippet) -> bool {
        if self.exclude_deleted && snippet.is_deleted {
            return false;
        }
        if self.favorites_only && !snippet.is_favorites {
            return false;
        }
        true
    }
}

/// Tag identifier → tag name. Later tags with a repeated identifier win.
pub fn tag_names(tags: &[Tag]) -> HashMap<&str, &str> {
    tags.iter()
        .map(|tag| (tag.id.as_str(), tag.name.as_str()))
        .collect()
}

pub fn enrich(
    snippets: &[Snippet],
    folders: &FolderPathMap,
    tags: &[Tag],
    filter: SnippetFilter,
) -> OutputData {
    let tag_map = tag_names(tags);
    let records: Vec<SnippetOutput> = snippets
        .iter()
        .filter(|snippet| filter.accepts(snippet))
        .map(|snippet| enrich_snippet(snippet, folders, &tag_map))
        .collect();

    debug!(
        input = snippets.len(),
        output = records.len(),
        "enriched snippets"
    );
    OutputData { snippets: records }
}

fn enrich_snippet(
    snippet: &Snippet,
    folders: &FolderPathMap,
    tag_map: &HashMap<&str, &str>,
) -> SnippetOutput {
    let tags = snippet
        .tags_ids
        .iter()
        .map(|id| match tag_map.get(id.as_str()) {
            Some(name) => (*name).to_string(),
            None => {
                debug!(snippet = %snippet.id, tag = %id, "unknown tag id");
                UNKNOWN_TAG.to_string()
            }
        })
        .collect();

    SnippetOutput {
        name: snippet.name.clone(),
        folder_path: folder_path(&snippet.folder_id, folders).to_string(),
        tags,
        content: snippet.content.clone(),
    }
}

fn folder_path<'a>(folder_id: &str, folders: &'a FolderPathMap) -> &'a str {
    if folder_id.is_empty() {
        return UNCATEGORIZED;
    }
    match folders.get(folder_id) {
        Some(path) if !path.is_empty() => path,
        _ => UNCATEGORIZED,
    }
}
