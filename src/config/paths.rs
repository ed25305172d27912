use super::traits::ConfigSection;
use crate::error::TrackweaveError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Raw input audio to be cut into snippets.
    pub input_dir: PathBuf,
    pub snippets_dir: PathBuf,
    /// Chroma-conditioned regenerations of the snippets.
    pub chroma_dir: PathBuf,
    /// Per-generation renders and the final best solutions.
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("assets/audio"),
            snippets_dir: PathBuf::from("assets/snippets"),
            chroma_dir: PathBuf::from("assets/chroma"),
            output_dir: PathBuf::from("assets/output"),
        }
    }
}

impl ConfigSection for PathsConfig {
    fn section_name() -> &'static str {
        "paths"
    }

    fn validate(&self) -> Result<(), TrackweaveError> {
        // Directories are created on demand; nothing to check up front.
        Ok(())
    }
}
