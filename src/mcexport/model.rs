//! Wire types for the massCode database and the derived output records.
//!
//! The input side ([`Database`], [`Folder`], [`Snippet`], [`Tag`]) mirrors the
//! `db.json` document massCode writes. Decoding is deliberately lenient: unknown
//! fields are ignored, and a missing field or an explicit `null` takes the zero
//! value for its type. Metadata the exporter never reads (timestamps, ordering,
//! open/favorite/deleted flags) is still carried so a decoded database can be
//! re-serialized unchanged.
//!
//! The output side ([`OutputData`], [`SnippetOutput`]) is what every renderer
//! consumes. Its serialized field names are part of the JSON export format.

use serde::{Deserialize, Deserializer, Serialize};

/// Parent identifier values that mark a root folder.
const ROOT_PARENT_MARKERS: [&str; 2] = ["", "null"];

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default, deserialize_with = "null_as_default")]
    pub folders: Vec<Folder>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub snippets: Vec<Snippet>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_open: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub index: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: i64,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = parent_id.into();
        self
    }

    /// The parent identifier, or `None` for a root folder.
    pub fn parent(&self) -> Option<&str> {
        let id = self.parent_id.as_str();
        if ROOT_PARENT_MARKERS.contains(&id) {
            None
        } else {
            Some(id)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub folder_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<ContentBlock>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_favorites: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_deleted: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: i64,
}

impl Snippet {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn in_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = folder_id.into();
        self
    }

    pub fn with_tags<I, T>(mut self, tag_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags_ids = tag_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_content(mut self, block: ContentBlock) -> Self {
        self.content.push(block);
        self
    }
}

/// One fragment of a snippet: a file or language variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

impl ContentBlock {
    pub fn new(
        label: impl Into<String>,
        language: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            language: language.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: i64,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputData {
    pub snippets: Vec<SnippetOutput>,
}

/// A snippet with its folder and tags resolved to display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetOutput {
    pub name: String,
    pub folder_path: String,
    pub tags: Vec<String>,
    pub content: Vec<ContentBlock>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_markers() {
        assert_eq!(Folder::new("a", "A").parent(), None);
        assert_eq!(Folder::new("a", "A").with_parent("null").parent(), None);
        assert_eq!(Folder::new("a", "A").with_parent("b").parent(), Some("b"));
    }

    #[test]
    fn test_null_fields_take_zero_values() {
        let json = r#"{
            "id": "f1",
            "name": null,
            "parentId": null,
            "isOpen": null,
            "index": null
        }"#;
        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.id, "f1");
        assert_eq!(folder.name, "");
        assert_eq!(folder.parent(), None);
        assert!(!folder.is_open);
        assert_eq!(folder.index, 0);
    }

    #[test]
    fn test_snippet_wire_names() {
        let snippet = Snippet::new("s1", "Hi")
            .in_folder("B")
            .with_tags(["t1"])
            .with_content(ContentBlock::new("main", "go", "x"));
        let value = serde_json::to_value(&snippet).unwrap();

        assert_eq!(value["folderId"], "B");
        assert_eq!(value["tagsIds"][0], "t1");
        assert_eq!(value["isFavorites"], false);
        assert_eq!(value["content"][0]["language"], "go");
    }

    #[test]
    fn test_output_wire_names() {
        let output = SnippetOutput {
            name: "Hi".into(),
            folder_path: "Root/Child".into(),
            tags: vec![],
            content: vec![],
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["folderPath"], "Root/Child");
        assert!(value.get("folder_path").is_none());
    }
}
