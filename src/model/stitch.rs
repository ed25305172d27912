use super::MelodyModel;
use crate::audio::{io, AudioClip};
use crate::error::{Result, TrackweaveError};
use log::info;
use std::path::Path;

/// Render a sample medley: unconditioned clips, then one clip per text
/// description, then chroma-conditioned renders of the melody, all
/// concatenated back to back and exported as one file.
///
/// Useful as a smoke test of the model service and as raw material for the
/// snippet bank.
pub fn render_sample_medley<M: MelodyModel>(
    model: &M,
    descriptions: &[String],
    unconditional_count: usize,
    melody_path: &Path,
    output: &Path,
) -> Result<AudioClip> {
    let melody = io::read_wav(melody_path)?;

    let mut clips = model.generate_unconditional(unconditional_count)?;
    clips.extend(model.generate(descriptions)?);
    clips.extend(model.generate_with_chroma(descriptions, &melody)?);

    let mut blended: Option<AudioClip> = None;
    for clip in &clips {
        match blended.as_mut() {
            Some(acc) => acc.append(clip)?,
            None => {
                blended = Some(clip.clone());
            }
        }
    }

    let medley =
        blended.ok_or_else(|| TrackweaveError::Model("model returned no clips".to_string()))?;
    io::write_wav(output, &medley)?;
    info!(
        "stitched {} generated clips into '{}' ({} ms)",
        clips.len(),
        output.display(),
        medley.len_ms()
    );
    Ok(medley)
}
