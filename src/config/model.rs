use super::traits::ConfigSection;
use crate::error::TrackweaveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Command that launches the external generation service.
    pub command: String,
    pub model_id: String,
    /// Length of each generated clip, in seconds.
    pub duration_secs: u32,
    /// Sample rate the model renders at.
    pub sample_rate: u32,
    /// Text prompts used for conditioned generation.
    pub descriptions: Vec<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            command: "musicgen-service".to_string(),
            model_id: "facebook/musicgen-melody".to_string(),
            duration_secs: 8,
            sample_rate: 32000,
            descriptions: vec![
                "breakcore".to_string(),
                "IDM".to_string(),
                "hyperpop".to_string(),
            ],
        }
    }
}

impl ConfigSection for ModelConfig {
    fn section_name() -> &'static str {
        "model"
    }

    fn validate(&self) -> Result<(), TrackweaveError> {
        if self.command.is_empty() {
            return Err(TrackweaveError::Configuration(
                "Model service command must not be empty".to_string(),
            ));
        }
        if self.duration_secs == 0 {
            return Err(TrackweaveError::Configuration(
                "Generation duration must be at least 1 second".to_string(),
            ));
        }
        if self.sample_rate == 0 {
            return Err(TrackweaveError::Configuration(
                "Sample rate must be positive".to_string(),
            ));
        }
        if self.descriptions.is_empty() {
            return Err(TrackweaveError::Configuration(
                "At least one text description is required".to_string(),
            ));
        }
        Ok(())
    }
}
