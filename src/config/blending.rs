use super::traits::ConfigSection;
use crate::error::TrackweaveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendConfig {
    pub min_target_minutes: f64,
    pub max_target_minutes: f64,
    pub snippet_secs: u32,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            min_target_minutes: 3.5,
            max_target_minutes: 4.5,
            snippet_secs: 10,
        }
    }
}

impl ConfigSection for BlendConfig {
    fn section_name() -> &'static str {
        "blending"
    }

    fn validate(&self) -> Result<(), TrackweaveError> {
        if self.min_target_minutes <= 0.0 {
            return Err(TrackweaveError::Configuration(
                "Minimum target length must be positive".to_string(),
            ));
        }
        if self.min_target_minutes >= self.max_target_minutes {
            return Err(TrackweaveError::Configuration(
                "Minimum target length must be below the maximum".to_string(),
            ));
        }
        if self.snippet_secs == 0 {
            return Err(TrackweaveError::Configuration(
                "Snippet length must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }
}
