/*!
This module provides the mechanism for collecting and keying the per-device
snapshots the merged graph is built from.

This module defines:
- `SnapshotStore`: an insertion-ordered mapping from device name to
  `TopologySnapshot`, loaded from `topology_<device>.json` files.
- `StoreError`: the loader's error type.

A snapshot is keyed by its JSON body's `device` field, falling back to the
filename stem when the body does not carry one. The loader walks files in
sorted filename order so that graph assembly is reproducible; an unreadable
or corrupt file is skipped with a warning rather than aborting the batch.
*/

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::topology::snapshot::TopologySnapshot;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("topology directory not found: {0}")]
    DirectoryMissing(PathBuf),
    #[error("failed to read topology directory {dir}: {source}")]
    DirectoryUnreadable {
        dir: PathBuf,
        source: std::io::Error,
    },
}

/// Insertion-ordered collection of snapshots, keyed by device name.
///
/// The key order is the order snapshots were inserted (for the loader:
/// sorted filename order), and it is the iteration order every consumer
/// sees, so node addition during graph assembly is deterministic.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    order: Vec<String>,
    snapshots: HashMap<String, TopologySnapshot>,
}

impl SnapshotStore {
    /// Loads every `topology_*.json` file under `dir`.
    ///
    /// A missing directory is an error the caller may treat as "no data";
    /// individual bad files only produce warnings.
    pub fn load_dir(dir: &Path) -> Result<Self, StoreError> {
        if !dir.is_dir() {
            return Err(StoreError::DirectoryMissing(dir.to_path_buf()));
        }

        let entries = fs::read_dir(dir).map_err(|source| StoreError::DirectoryUnreadable {
            dir: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| Self::is_snapshot_file(path))
            .collect();
        paths.sort();

        let mut store = SnapshotStore::default();
        for path in paths {
            match Self::load_file(&path) {
                Ok((device, snapshot)) => {
                    debug!("loaded snapshot for {device} from {}", path.display());
                    store.insert(device, snapshot);
                }
                Err(reason) => {
                    warn!("could not load {}: {reason}", path.display());
                }
            }
        }
        Ok(store)
    }

    fn is_snapshot_file(path: &Path) -> bool {
        path.is_file()
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("topology_") && name.ends_with(".json"))
    }

    fn load_file(path: &Path) -> Result<(String, TopologySnapshot), String> {
        let body = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let snapshot: TopologySnapshot =
            serde_json::from_str(&body).map_err(|e| e.to_string())?;

        // Loader provenance: the body's device field, else the file stem.
        let device = if snapshot.device.is_empty() {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_string()
        } else {
            snapshot.device.clone()
        };
        Ok((device, snapshot))
    }

    /// Inserts a snapshot under `device`, keeping first-insertion order.
    /// Re-inserting an existing key replaces the snapshot in place.
    pub fn insert(&mut self, device: String, snapshot: TopologySnapshot) {
        if !self.snapshots.contains_key(&device) {
            self.order.push(device.clone());
        }
        self.snapshots.insert(device, snapshot);
    }

    pub fn get(&self, device: &str) -> Option<&TopologySnapshot> {
        self.snapshots.get(device)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Snapshots in insertion order, keyed by loader provenance (which wins
    /// over the body's own `device` field when they disagree).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TopologySnapshot)> {
        self.order
            .iter()
            .filter_map(|device| Some((device.as_str(), self.snapshots.get(device)?)))
    }
}

mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[allow(dead_code)]
    fn fixture_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/snapshots")
    }

    #[test]
    fn test_load_dir_skips_corrupt_files() {
        let store = SnapshotStore::load_dir(&fixture_dir()).unwrap();

        // The directory holds four topology_*.json files; one is corrupt
        // and must be skipped without failing the batch.
        assert_eq!(store.len(), 3);
        let devices: Vec<_> = store.iter().map(|(device, _)| device).collect();
        assert_eq!(devices, vec!["access-2", "core-1", "topology_edge-3"]);
    }

    #[test]
    fn test_loader_key_falls_back_to_file_stem() {
        let store = SnapshotStore::load_dir(&fixture_dir()).unwrap();
        // topology_edge-3.json carries no device field in its body, so the
        // file stem becomes the key.
        assert!(store.get("topology_edge-3").is_some());
        assert!(store.get("edge-3").is_none());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let missing = fixture_dir().join("does-not-exist");
        assert!(matches!(
            SnapshotStore::load_dir(&missing),
            Err(StoreError::DirectoryMissing(_))
        ));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut store = SnapshotStore::default();
        store.insert("zeta".into(), TopologySnapshot::default());
        store.insert("alpha".into(), TopologySnapshot::default());
        store.insert("zeta".into(), TopologySnapshot::default());

        let devices: Vec<_> = store.iter().map(|(device, _)| device).collect();
        assert_eq!(devices, vec!["zeta", "alpha"]);
    }
}
