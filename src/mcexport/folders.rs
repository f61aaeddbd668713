//! # Folder Path Resolution
//!
//! massCode stores folders as a flat list with parent links. The exporter shows
//! each snippet's folder as a slash-joined path from the root ancestor down,
//! e.g. `Work/Backend/SQL`. [`FolderPathMap::build`] computes that path once
//! for every folder so enrichment is a single map lookup per snippet.
//!
//! ## Malformed Hierarchies
//!
//! The database is never validated, so the walk up the parent chain must
//! survive whatever it finds:
//!
//! - **Dangling parent**: the parent identifier matches no folder. The walk
//!   stops and keeps the path built so far.
//! - **Cycle**: a parent identifier already seen on this walk (including a
//!   folder that is its own parent). The walk stops the same way.
//! - **Duplicate identifiers**: parent lookups resolve to the first folder with
//!   that identifier; the map entry for a duplicated identifier holds the path
//!   of the last one.

use crate::model::Folder;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

pub const PATH_SEPARATOR: &str = "/";

/// Folder identifier → resolved folder path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderPathMap {
    paths: HashMap<String, String>,
    cyclic: Vec<String>,
}

impl FolderPathMap {
    pub fn build(folders: &[Folder]) -> Self {
        let mut index: HashMap<&str, &Folder> = HashMap::with_capacity(folders.len());
        for folder in folders {
            index.entry(folder.id.as_str()).or_insert(folder);
        }

        let mut paths = HashMap::with_capacity(folders.len());
        let mut cyclic = Vec::new();
        for folder in folders {
            let (path, walk) = resolve_path(folder, &index);
            if walk == Walk::Cycle {
                cyclic.push(folder.id.clone());
            }
            paths.insert(folder.id.clone(), path);
        }

        debug!(folders = paths.len(), cyclic = cyclic.len(), "resolved folder paths");
        Self { paths, cyclic }
    }

    pub fn get(&self, folder_id: &str) -> Option<&str> {
        self.paths.get(folder_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Identifiers of folders whose parent chain loops, in input order.
    pub fn cyclic(&self) -> &[String] {
        &self.cyclic
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    Root,
    Dangling,
    Cycle,
}

fn resolve_path(folder: &Folder, index: &HashMap<&str, &Folder>) -> (String, Walk) {
    let mut segments = vec![folder.name.as_str()];
    let mut visited: HashSet<&str> = HashSet::from([folder.id.as_str()]);
    let mut current = folder.parent();
    let mut walk = Walk::Root;

    while let Some(parent_id) = current {
        if !visited.insert(parent_id) {
            warn!(
                folder = %folder.id,
                parent = %parent_id,
                "folder parent chain loops back on itself, truncating path"
            );
            walk = Walk::Cycle;
            break;
        }
        let Some(parent) = index.get(parent_id) else {
            debug!(folder = %folder.id, parent = %parent_id, "parent folder not found");
            walk = Walk::Dangling;
            break;
        };
        segments.push(parent.name.as_str());
        current = parent.parent();
    }

    segments.reverse();
    (segments.join(PATH_SEPARATOR), walk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_folder_is_its_own_name() {
        let map = FolderPathMap::build(&[Folder::new("A", "Root")]);
        assert_eq!(map.get("A"), Some("Root"));
    }

    #[test]
    fn test_null_parent_is_root() {
        let map = FolderPathMap::build(&[Folder::new("A", "Root").with_parent("null")]);
        assert_eq!(map.get("A"), Some("Root"));
    }

    #[test]
    fn test_nested_folders() {
        let folders = vec![
            Folder::new("A", "Grandparent"),
            Folder::new("B", "Parent").with_parent("A"),
            Folder::new("C", "Self").with_parent("B"),
        ];
        let map = FolderPathMap::build(&folders);

        assert_eq!(map.get("A"), Some("Grandparent"));
        assert_eq!(map.get("B"), Some("Grandparent/Parent"));
        assert_eq!(map.get("C"), Some("Grandparent/Parent/Self"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_child_listed_before_parent() {
        let folders = vec![
            Folder::new("B", "Child").with_parent("A"),
            Folder::new("A", "Root"),
        ];
        let map = FolderPathMap::build(&folders);
        assert_eq!(map.get("B"), Some("Root/Child"));
    }

    #[test]
    fn test_dangling_parent_truncates() {
        let folders = vec![
            Folder::new("B", "Parent").with_parent("missing"),
            Folder::new("C", "Self").with_parent("B"),
        ];
        let map = FolderPathMap::build(&folders);

        assert_eq!(map.get("B"), Some("Parent"));
        assert_eq!(map.get("C"), Some("Parent/Self"));
    }

    #[test]
    fn test_self_parent_terminates() {
        let map = FolderPathMap::build(&[Folder::new("A", "Loop").with_parent("A")]);
        assert_eq!(map.get("A"), Some("Loop"));
    }

    #[test]
    fn test_two_folder_cycle_terminates_with_partial_path() {
        let folders = vec![
            Folder::new("A", "First").with_parent("B"),
            Folder::new("B", "Second").with_parent("A"),
        ];
        let map = FolderPathMap::build(&folders);

        assert_eq!(map.get("A"), Some("Second/First"));
        assert_eq!(map.get("B"), Some("First/Second"));
        assert_eq!(map.cyclic(), ["A", "B"]);
    }

    #[test]
    fn test_cycle_above_a_leaf() {
        let folders = vec![
            Folder::new("A", "X").with_parent("B"),
            Folder::new("B", "Y").with_parent("A"),
            Folder::new("C", "Leaf").with_parent("A"),
        ];
        let map = FolderPathMap::build(&folders);
        assert_eq!(map.get("C"), Some("Y/X/Leaf"));
        assert_eq!(map.cyclic(), ["A", "B", "C"]);
    }

    #[test]
    fn test_dangling_and_root_folders_are_not_cyclic() {
        let folders = vec![
            Folder::new("A", "Root"),
            Folder::new("B", "Orphan").with_parent("missing"),
        ];
        let map = FolderPathMap::build(&folders);
        assert!(map.cyclic().is_empty());
    }

    #[test]
    fn test_duplicate_ids_first_wins_for_lookup_last_wins_for_entry() {
        let folders = vec![
            Folder::new("A", "First"),
            Folder::new("A", "Second"),
            Folder::new("B", "Child").with_parent("A"),
        ];
        let map = FolderPathMap::build(&folders);

        assert_eq!(map.get("A"), Some("Second"));
        assert_eq!(map.get("B"), Some("First/Child"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_unknown_id_is_absent() {
        let map = FolderPathMap::build(&[]);
        assert!(map.is_empty());
        assert_eq!(map.get("A"), None);
    }
}
