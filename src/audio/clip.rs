use crate::error::{Result, TrackweaveError};

/// In-memory PCM audio: one sample buffer per channel plus a sample rate.
///
/// Clips are sliced by millisecond offsets and concatenated back to back.
/// There is no resampling and no crossfading; blending assumes every clip in
/// a run shares a format, and `append` rejects the mismatches it can see
/// (channel count, sample rate).
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    samples: Vec<Vec<f32>>,
    sample_rate: u32,
}

impl AudioClip {
    pub fn new(samples: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self> {
        if samples.is_empty() {
            return Err(TrackweaveError::Blend(
                "audio clip needs at least one channel".to_string(),
            ));
        }
        let len = samples[0].len();
        if samples.iter().any(|channel| channel.len() != len) {
            return Err(TrackweaveError::Blend(
                "audio clip channels have unequal lengths".to_string(),
            ));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Zero-length clip with the given format.
    pub fn empty(sample_rate: u32, channels: u16) -> Self {
        Self {
            samples: vec![Vec::new(); channels as usize],
            sample_rate,
        }
    }

    /// Clip of digital silence. Mostly useful for tests and padding.
    pub fn silence(duration_ms: u64, sample_rate: u32, channels: u16) -> Self {
        let len = Self::ms_to_samples(duration_ms, sample_rate);
        Self {
            samples: vec![vec![0.0; len]; channels as usize],
            sample_rate,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.samples.len() as u16
    }

    pub fn channel(&self, index: usize) -> &[f32] {
        &self.samples[index]
    }

    pub fn len_samples(&self) -> usize {
        self.samples[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len_samples() == 0
    }

    /// Duration in whole milliseconds (floor).
    pub fn len_ms(&self) -> u64 {
        (self.len_samples() as u64 * 1000) / self.sample_rate as u64
    }

    fn ms_to_samples(ms: u64, sample_rate: u32) -> usize {
        ((ms as u128 * sample_rate as u128) / 1000) as usize
    }

    /// Sub-clip bounded by millisecond offsets, clamped to the clip length.
    pub fn slice_ms(&self, start_ms: u64, end_ms: u64) -> Self {
        let len = self.len_samples();
        let start = Self::ms_to_samples(start_ms, self.sample_rate).min(len);
        let end = Self::ms_to_samples(end_ms, self.sample_rate).clamp(start, len);
        let samples = self
            .samples
            .iter()
            .map(|channel| channel[start..end].to_vec())
            .collect();
        Self {
            samples,
            sample_rate: self.sample_rate,
        }
    }

    pub fn truncate_ms(&self, end_ms: u64) -> Self {
        self.slice_ms(0, end_ms)
    }

    /// Keep only the first `len` samples. Used for sample-exact fills.
    pub fn truncate_samples(&self, len: usize) -> Self {
        let end = len.min(self.len_samples());
        let samples = self
            .samples
            .iter()
            .map(|channel| channel[..end].to_vec())
            .collect();
        Self {
            samples,
            sample_rate: self.sample_rate,
        }
    }

    /// Concatenate `other` onto the end of this clip.
    pub fn append(&mut self, other: &AudioClip) -> Result<()> {
        if other.channels() != self.channels() {
            return Err(TrackweaveError::ChannelMismatch {
                expected: self.channels(),
                actual: other.channels(),
            });
        }
        if other.sample_rate != self.sample_rate {
            return Err(TrackweaveError::SampleRateMismatch {
                expected: self.sample_rate,
                actual: other.sample_rate,
            });
        }
        for (channel, extra) in self.samples.iter_mut().zip(&other.samples) {
            channel.extend_from_slice(extra);
        }
        Ok(())
    }
}
