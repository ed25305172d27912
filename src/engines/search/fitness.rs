use crate::audio::AudioClip;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scoring strategy for rendered blends.
///
/// The scorer is injected into the search engine so a real metric can be
/// substituted without touching the loop.
pub trait FitnessScorer {
    fn score(&mut self, blend: &AudioClip) -> Result<f64>;
}

/// Placeholder scorer: uniform random in [0, 1), independent of the input.
///
/// Stands in until a real metric (spectral similarity, loudness
/// consistency) is wired up; with it, the search is a random walk.
pub struct RandomScorer {
    rng: StdRng,
}

impl RandomScorer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl FitnessScorer for RandomScorer {
    fn score(&mut self, _blend: &AudioClip) -> Result<f64> {
        Ok(self.rng.gen::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_scorer_range() {
        let mut scorer = RandomScorer::new(Some(42));
        let clip = AudioClip::silence(100, 8000, 1);
        for _ in 0..100 {
            let score = scorer.score(&clip).unwrap();
            assert!((0.0..1.0).contains(&score));
        }
    }

    #[test]
    fn test_random_scorer_seeded_is_reproducible() {
        let clip = AudioClip::silence(100, 8000, 1);
        let mut a = RandomScorer::new(Some(7));
        let mut b = RandomScorer::new(Some(7));
        for _ in 0..10 {
            assert_eq!(a.score(&clip).unwrap(), b.score(&clip).unwrap());
        }
    }
}
