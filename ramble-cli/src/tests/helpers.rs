//! Test helpers for writing catalogues into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Three Richmond sites plus one record without coordinates.
pub(super) const RICHMOND_CATALOGUE: &str = r#"{
  "pois": [
    {
      "id": "castle",
      "name": "Richmond Castle",
      "geo": {"lat": 54.4039, "lng": -1.7394},
      "vibe_tags": ["history", "medieval", "military", "ruins"],
      "facts": ["Begun in 1071"],
      "source_reliability": 0.9
    },
    {
      "id": "greyfriars",
      "name": "Greyfriars Tower",
      "geo": {"lat": 54.4028, "lng": -1.735},
      "vibe_tags": ["religious", "ruins", "medieval", "haunted"]
    },
    {
      "id": "bridge",
      "name": "Richmond Bridge",
      "geo": {"lat": 54.4042, "lng": -1.7402},
      "vibe_tags": ["scenic", "georgian", "engineering"]
    },
    {"id": "rumour", "name": "Somewhere in town"}
  ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory holding a catalogue file.
pub(super) struct CatalogueDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl CatalogueDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn richmond(&self) -> Utf8PathBuf {
        self.write("richmond.json", RICHMOND_CATALOGUE)
    }
}
