use crate::audio::AudioClip;
use crate::error::Result;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::fs;
use std::path::Path;

/// Read a WAV file into an [`AudioClip`], converting integer PCM to f32.
pub fn read_wav(path: impl AsRef<Path>) -> Result<AudioClip> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;
    let mut samples = vec![Vec::new(); channels];

    match spec.sample_format {
        SampleFormat::Float => {
            for (idx, sample) in reader.samples::<f32>().enumerate() {
                samples[idx % channels].push(sample?);
            }
        }
        SampleFormat::Int => {
            let max = (1_i64 << (spec.bits_per_sample - 1)) as f32;
            for (idx, sample) in reader.samples::<i32>().enumerate() {
                samples[idx % channels].push(sample? as f32 / max);
            }
        }
    }

    AudioClip::new(samples, spec.sample_rate)
}

/// Export a clip as 16-bit PCM WAV, creating the parent directory if missing.
pub fn write_wav(path: impl AsRef<Path>, clip: &AudioClip) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let spec = WavSpec {
        channels: clip.channels(),
        sample_rate: clip.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;

    for idx in 0..clip.len_samples() {
        for channel in 0..clip.channels() as usize {
            let value = clip.channel(channel)[idx].clamp(-1.0, 1.0);
            writer.write_sample((value * i16::MAX as f32).round() as i16)?;
        }
    }

    writer.finalize()?;
    Ok(())
}
