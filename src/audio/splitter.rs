use crate::audio::io;
use crate::error::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Cut every WAV file in `input_dir` into `snippet_secs`-long snippets.
///
/// Snippets are written to `output_dir` (created if missing) as
/// `{stem}_snippet_{i}.wav`, 1-based. A tail shorter than the snippet
/// length is kept as the final snippet rather than dropped.
pub fn split_to_snippets(
    input_dir: &Path,
    output_dir: &Path,
    snippet_secs: u32,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;
    let snippet_ms = snippet_secs as u64 * 1000;
    let mut written = Vec::new();

    let mut inputs: Vec<PathBuf> = fs::read_dir(input_dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("wav"))
        .collect();
    inputs.sort();

    for path in inputs {
        let clip = io::read_wav(&path)?;
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("snippet")
            .to_string();

        let total_ms = clip.len_ms();
        let mut index = 0;
        let mut start = 0;
        while start < total_ms {
            index += 1;
            let snippet = clip.slice_ms(start, start + snippet_ms);
            let out = output_dir.join(format!("{}_snippet_{}.wav", stem, index));
            io::write_wav(&out, &snippet)?;
            written.push(out);
            start += snippet_ms;
        }
        info!("split '{}' into {} snippets", path.display(), index);
    }

    Ok(written)
}
