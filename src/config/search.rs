use super::traits::ConfigSection;
use crate::error::TrackweaveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub population_size: usize,
    pub num_generations: usize,
    pub elite_count: usize,
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            num_generations: 10,
            elite_count: 2,
            seed: None,
        }
    }
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<(), TrackweaveError> {
        if self.population_size < 4 {
            return Err(TrackweaveError::Configuration(
                "Population size must be at least 4".to_string(),
            ));
        }
        if self.num_generations == 0 {
            return Err(TrackweaveError::Configuration(
                "Number of generations must be at least 1".to_string(),
            ));
        }
        if self.elite_count < 2 {
            return Err(TrackweaveError::Configuration(
                "Elite count must be at least 2".to_string(),
            ));
        }
        if self.elite_count >= self.population_size {
            return Err(TrackweaveError::Configuration(
                "Elite count must be smaller than the population size".to_string(),
            ));
        }
        Ok(())
    }
}
