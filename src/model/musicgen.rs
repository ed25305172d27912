//! Handle to the external MusicGen service.
//!
//! The pretrained model runs out of process (a Python service wrapping
//! audiocraft). The handle is an explicit resource: constructed once at
//! startup and passed by reference to whichever stage needs generation,
//! never held as process-wide global state.

use crate::audio::{io, AudioClip};
use crate::config::model::ModelConfig;
use crate::error::{Result, TrackweaveError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Narrow contract with the pretrained generative model: prompts in, a
/// fixed number of clips at a known sample rate out.
pub trait MelodyModel {
    /// Sample rate of every clip the model renders.
    fn sample_rate(&self) -> u32;

    /// One clip per text description.
    fn generate(&self, descriptions: &[String]) -> Result<Vec<AudioClip>>;

    /// `count` unconditioned clips.
    fn generate_unconditional(&self, count: usize) -> Result<Vec<AudioClip>>;

    /// One clip per description, each conditioned on the melody's chroma.
    fn generate_with_chroma(
        &self,
        descriptions: &[String],
        melody: &AudioClip,
    ) -> Result<Vec<AudioClip>>;
}

#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum ModelRequest<'a> {
    Generate {
        model_id: &'a str,
        duration_secs: u32,
        descriptions: &'a [String],
    },
    GenerateUnconditional {
        model_id: &'a str,
        duration_secs: u32,
        count: usize,
    },
    GenerateWithChroma {
        model_id: &'a str,
        duration_secs: u32,
        descriptions: &'a [String],
        melody_path: PathBuf,
        melody_sample_rate: u32,
    },
}

#[derive(Debug, Deserialize)]
struct ModelResponse {
    #[serde(default)]
    clips: Vec<PathBuf>,
    #[serde(default)]
    error: Option<String>,
}

/// Client that drives the service over stdin/stdout: one JSON request in,
/// one JSON response naming the rendered WAV files out.
pub struct MusicgenService {
    config: ModelConfig,
}

impl MusicgenService {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    fn call(&self, request: &ModelRequest) -> Result<Vec<AudioClip>> {
        let payload = serde_json::to_vec(request)?;

        let mut child = Command::new(&self.config.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| {
                TrackweaveError::Model(format!(
                    "failed to launch '{}': {}",
                    self.config.command, e
                ))
            })?;

        child
            .stdin
            .as_mut()
            .ok_or_else(|| TrackweaveError::Model("service stdin unavailable".to_string()))?
            .write_all(&payload)?;

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(TrackweaveError::Model(format!(
                "service exited with {}",
                output.status
            )));
        }

        let response: ModelResponse = serde_json::from_slice(&output.stdout)?;
        if let Some(error) = response.error {
            return Err(TrackweaveError::Model(error));
        }

        debug!("service returned {} clips", response.clips.len());
        response.clips.iter().map(io::read_wav).collect()
    }
}

impl MelodyModel for MusicgenService {
    fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }

    fn generate(&self, descriptions: &[String]) -> Result<Vec<AudioClip>> {
        self.call(&ModelRequest::Generate {
            model_id: &self.config.model_id,
            duration_secs: self.config.duration_secs,
            descriptions,
        })
    }

    fn generate_unconditional(&self, count: usize) -> Result<Vec<AudioClip>> {
        self.call(&ModelRequest::GenerateUnconditional {
            model_id: &self.config.model_id,
            duration_secs: self.config.duration_secs,
            count,
        })
    }

    fn generate_with_chroma(
        &self,
        descriptions: &[String],
        melody: &AudioClip,
    ) -> Result<Vec<AudioClip>> {
        // The melody crosses the process boundary as a file.
        let melody_path = std::env::temp_dir().join(format!(
            "trackweave_melody_{}.wav",
            std::process::id()
        ));
        io::write_wav(&melody_path, melody)?;

        let result = self.call(&ModelRequest::GenerateWithChroma {
            model_id: &self.config.model_id,
            duration_secs: self.config.duration_secs,
            descriptions,
            melody_path: melody_path.clone(),
            melody_sample_rate: melody.sample_rate(),
        });

        let _ = std::fs::remove_file(&melody_path);
        result
    }
}
