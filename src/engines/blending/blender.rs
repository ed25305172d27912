use crate::audio::{io, AudioClip};
use crate::error::{Result, TrackweaveError};
use crate::store::SnippetStore;
use log::debug;
use std::path::{Path, PathBuf};

pub const MIN_TARGET_MINUTES: f64 = 3.5;
pub const MAX_TARGET_MINUTES: f64 = 4.5;

/// Concatenates ordered snippets up to a target duration.
///
/// Segments are appended back to back; the segment that would overshoot the
/// target is truncated to exactly fill the remainder and the blend stops
/// there. If the inputs run out first, the output is the full concatenation.
/// No crossfade, no resampling.
pub struct Blender {
    min_target_minutes: f64,
    max_target_minutes: f64,
}

impl Default for Blender {
    fn default() -> Self {
        Self::new(MIN_TARGET_MINUTES, MAX_TARGET_MINUTES)
    }
}

impl Blender {
    pub fn new(min_target_minutes: f64, max_target_minutes: f64) -> Self {
        Self {
            min_target_minutes,
            max_target_minutes,
        }
    }

    /// Render the blend and export it as WAV.
    ///
    /// The target-length range check runs before any file is opened; an
    /// out-of-range target never touches the filesystem.
    pub fn blend(
        &self,
        target_minutes: f64,
        segments: &[PathBuf],
        order: &[usize],
        output: &Path,
    ) -> Result<AudioClip> {
        let clip = self.render(target_minutes, segments, order)?;
        io::write_wav(output, &clip)?;
        debug!(
            "blended {} segments into '{}' ({} ms)",
            order.len(),
            output.display(),
            clip.len_ms()
        );
        Ok(clip)
    }

    /// Render the blend in memory without exporting.
    pub fn render(
        &self,
        target_minutes: f64,
        segments: &[PathBuf],
        order: &[usize],
    ) -> Result<AudioClip> {
        if target_minutes < self.min_target_minutes || target_minutes > self.max_target_minutes {
            return Err(TrackweaveError::TargetLength {
                actual: target_minutes,
                min: self.min_target_minutes,
                max: self.max_target_minutes,
            });
        }

        let mut blended: Option<AudioClip> = None;
        let mut target_samples = 0;

        for &idx in order {
            let path = segments.get(idx).ok_or_else(|| {
                TrackweaveError::Blend(format!(
                    "order index {} out of bounds for {} segments",
                    idx,
                    segments.len()
                ))
            })?;
            let segment = io::read_wav(path)?;

            let acc = match blended.as_mut() {
                Some(acc) => {
                    acc.append(&segment)?;
                    acc
                }
                None => {
                    // The first segment pins the output format and, with it,
                    // the sample-exact target.
                    target_samples = (target_minutes * 60.0 * segment.sample_rate() as f64)
                        .round() as usize;
                    blended.insert(segment)
                }
            };

            if acc.len_samples() >= target_samples {
                return Ok(acc.truncate_samples(target_samples));
            }
        }

        blended.ok_or_else(|| TrackweaveError::Blend("no segments to blend".to_string()))
    }
}

/// Concatenate every snippet in a directory into one file, no target length.
pub fn blend_directory(snippets_dir: &Path, output: &Path) -> Result<AudioClip> {
    let store = SnippetStore::open(snippets_dir)?;

    let mut blended: Option<AudioClip> = None;
    for path in store.paths() {
        let segment = io::read_wav(path)?;
        match blended.as_mut() {
            Some(acc) => acc.append(&segment)?,
            None => {
                blended = Some(segment);
            }
        }
    }

    let clip =
        blended.ok_or_else(|| TrackweaveError::Blend("no segments to blend".to_string()))?;
    io::write_wav(output, &clip)?;
    Ok(clip)
}
