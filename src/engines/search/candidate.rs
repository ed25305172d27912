use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// One proposed blend configuration evaluated by the search loop.
///
/// A candidate lives for a single generation: it is created at
/// initialization or by recombination, gets its fitness assigned during
/// evaluation, and is discarded unless retained as a parent.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Target track length in minutes.
    pub target_minutes: f64,
    /// Snippet paths this candidate draws from.
    pub segments: Vec<PathBuf>,
    /// Order in which the segments are blended (permutation of indices).
    pub order: Vec<usize>,
    /// Assigned once per generation, after the blend is scored.
    pub fitness: Option<f64>,
}

impl Candidate {
    /// Random candidate: uniform target length, shuffled segment selection,
    /// shuffled blend order.
    pub fn random<R: Rng>(
        snippets: &[PathBuf],
        target_range: &RangeInclusive<f64>,
        rng: &mut R,
    ) -> Self {
        let mut segments = snippets.to_vec();
        segments.shuffle(rng);

        let mut order: Vec<usize> = (0..segments.len()).collect();
        order.shuffle(rng);

        Self {
            target_minutes: rng.gen_range(target_range.clone()),
            segments,
            order,
            fitness: None,
        }
    }
}
