use super::{decode, DatabaseSource};
use crate::error::{ExportError, Result};
use crate::model::Database;

/// In-memory database source for testing.
pub enum InMemorySource {
    Bytes(Vec<u8>),
    Database(Database),
}

impl InMemorySource {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        InMemorySource::Bytes(bytes.into())
    }

    pub fn from_database(db: Database) -> Self {
        InMemorySource::Database(db)
    }

    /// Serializes `db` so loading exercises the decoder.
    pub fn encoded(db: &Database) -> Result<Self> {
        let bytes = serde_json::to_vec(db).map_err(ExportError::Serialization)?;
        Ok(InMemorySource::Bytes(bytes))
    }
}

impl DatabaseSource for InMemorySource {
    fn load(&self) -> Result<Database> {
        match self {
            InMemorySource::Bytes(bytes) => decode(bytes),
            InMemorySource::Database(db) => Ok(db.clone()),
        }
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
