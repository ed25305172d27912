use crate::error::{Result, TrackweaveError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory of snippet WAV files, listed in sorted order.
///
/// Only paths are held; clips are loaded lazily at blend time so a large
/// snippet bank never sits in memory whole.
#[derive(Debug, Clone)]
pub struct SnippetStore {
    dir: PathBuf,
    paths: Vec<PathBuf>,
}

impl SnippetStore {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let mut paths: Vec<PathBuf> = fs::read_dir(&dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("wav"))
            .collect();
        paths.sort();

        if paths.is_empty() {
            return Err(TrackweaveError::EmptyStore(dir.display().to_string()));
        }

        Ok(Self { dir, paths })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
