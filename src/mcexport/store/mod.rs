//! # Database Sources
//!
//! The exporter reads exactly one database per run. Where that database comes
//! from is abstracted behind the [`DatabaseSource`] trait so the pipeline can be
//! driven without touching the filesystem:
//!
//! - [`fs::FileSource`]: a massCode `db.json` on disk (production)
//! - [`memory::InMemorySource`]: raw bytes or an already-built [`Database`] (tests)
//!
//! Both funnel raw bytes through [`decode`], the only place that turns bytes
//! into a [`Database`]. Decoding checks structure only; duplicate identifiers,
//! dangling references and parent cycles are left for the resolver to tolerate.

use crate::error::{ExportError, Result};
use crate::model::Database;
use serde::de;
use serde_json::Value;
use tracing::debug;

pub mod fs;
pub mod memory;

/// Somewhere a snippet database can be loaded from.
pub trait DatabaseSource {
    /// Load and decode the database.
    fn load(&self) -> Result<Database>;

    /// Human-readable origin, used in messages.
    fn describe(&self) -> String;
}

/// Decode raw JSON bytes into a [`Database`].
///
/// The document and every record in it must be a JSON object. serde's derived
/// struct visitors also take a JSON array as a positional struct, so arrays in
/// record position are rejected before the typed decode.
pub fn decode(bytes: &[u8]) -> Result<Database> {
    let value: Value = serde_json::from_slice(bytes).map_err(ExportError::Decode)?;
    check_records(&value).map_err(ExportError::Decode)?;
    let db: Database = serde_json::from_value(value).map_err(ExportError::Decode)?;
    debug!(
        folders = db.folders.len(),
        snippets = db.snippets.len(),
        tags = db.tags.len(),
        "decoded database"
    );
    Ok(db)
}

fn check_records(doc: &Value) -> std::result::Result<(), serde_json::Error> {
    expect_object(doc, "database")?;
    for (list, what) in [("folders", "folder"), ("snippets", "snippet"), ("tags", "tag")] {
        for record in records(doc, list) {
            expect_object(record, what)?;
            if list == "snippets" {
                for block in records(record, "content") {
                    expect_object(block, "content block")?;
                }
            }
        }
    }
    Ok(())
}

/// Elements of `parent[key]` when it is an array. Other shapes are left for
/// the typed decode to report.
fn records<'a>(parent: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    parent
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn expect_object(value: &Value, what: &str) -> std::result::Result<(), serde_json::Error> {
    if value.is_array() {
        return Err(de::Error::invalid_type(
            de::Unexpected::Seq,
            &format!("a {} object", what).as_str(),
        ));
    }
    Ok(())
}
