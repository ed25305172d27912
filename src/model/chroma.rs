use super::MelodyModel;
use crate::audio::io;
use crate::error::Result;
use crate::store::SnippetStore;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Chroma-conditioned regeneration of every snippet in a directory.
///
/// Each snippet is fed to the model as a melody together with the text
/// descriptions; the renders land in `output_dir` (created if missing) as
/// `{stem}_chroma_{i}.wav`, 1-based.
pub fn generate_chroma_for_snippets<M: MelodyModel>(
    model: &M,
    snippets_dir: &Path,
    output_dir: &Path,
    descriptions: &[String],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;
    let store = SnippetStore::open(snippets_dir)?;
    let mut written = Vec::new();

    for path in store.paths() {
        let melody = io::read_wav(path)?;
        let clips = model.generate_with_chroma(descriptions, &melody)?;

        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("snippet");
        for (i, clip) in clips.iter().enumerate() {
            let out = output_dir.join(format!("{}_chroma_{}.wav", stem, i + 1));
            io::write_wav(&out, clip)?;
            written.push(out);
        }
        info!(
            "generated {} chroma clips for '{}'",
            clips.len(),
            path.display()
        );
    }

    Ok(written)
}
