use crate::engines::blending::Blender;
use crate::engines::search::candidate::Candidate;
use crate::engines::search::fitness::FitnessScorer;
use crate::engines::search::operators;
use crate::error::Result;
use crate::store::SnippetStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

pub struct SearchParams {
    pub population_size: usize,
    pub generations: usize,
    /// Candidates retained verbatim each generation. The original procedure
    /// hard-codes 2 and the recombination scheme assumes a retained pair.
    pub elite_count: usize,
    /// Range the initial target lengths are drawn from, in minutes.
    pub target_range: RangeInclusive<f64>,
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 10,
            elite_count: 2,
            target_range: 3.5..=4.5,
            seed: None,
        }
    }
}

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_candidate_evaluated(&mut self, candidate_num: usize, total: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64);
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation)
    }

    fn on_candidate_evaluated(&mut self, candidate_num: usize, total: usize) {
        (**self).on_candidate_evaluated(candidate_num, total)
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64) {
        (**self).on_generation_complete(generation, best_fitness)
    }
}

/// Population search over snippet orderings and target lengths.
///
/// Each generation every candidate is rendered by the blender and scored by
/// the injected scorer, the top `elite_count` survive verbatim, and the rest
/// of the next generation is filled by whole-field recombination of the
/// survivors. Runs for a fixed generation count; no early stopping.
pub struct SearchEngine<S: FitnessScorer> {
    params: SearchParams,
    blender: Blender,
    scorer: S,
    rng: StdRng,
}

impl<S: FitnessScorer> SearchEngine<S> {
    pub fn new(params: SearchParams, blender: Blender, scorer: S) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            params,
            blender,
            scorer,
            rng,
        }
    }

    /// Run the search and export the final elite as `best_solution_{rank}.wav`.
    ///
    /// Every evaluated candidate also leaves its render behind as
    /// `generation_{g}_individual_{i}.wav` (both 1-based) in `output_dir`.
    pub fn run<C: ProgressCallback>(
        &mut self,
        store: &SnippetStore,
        output_dir: &Path,
        mut callback: C,
    ) -> Result<Vec<Candidate>> {
        fs::create_dir_all(output_dir)?;

        let mut population = self.initialize_population(store);
        let mut elite: Vec<Candidate> = Vec::new();

        for generation in 0..self.params.generations {
            callback.on_generation_start(generation);

            self.evaluate_population(&mut population, generation, output_dir, &mut callback)?;

            population.sort_by(|a, b| {
                b.fitness
                    .partial_cmp(&a.fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            elite = population
                .iter()
                .take(self.params.elite_count)
                .cloned()
                .collect();

            let best_fitness = elite
                .first()
                .and_then(|candidate| candidate.fitness)
                .unwrap_or(0.0);
            callback.on_generation_complete(generation, best_fitness);

            if generation == self.params.generations - 1 {
                break;
            }

            population = self.next_generation(&elite);
        }

        for (rank, candidate) in elite.iter().enumerate() {
            let output = output_dir.join(format!("best_solution_{}.wav", rank + 1));
            self.blender.blend(
                candidate.target_minutes,
                &candidate.segments,
                &candidate.order,
                &output,
            )?;
        }

        Ok(elite)
    }

    fn initialize_population(&mut self, store: &SnippetStore) -> Vec<Candidate> {
        (0..self.params.population_size)
            .map(|_| Candidate::random(store.paths(), &self.params.target_range, &mut self.rng))
            .collect()
    }

    fn evaluate_population<C: ProgressCallback>(
        &mut self,
        population: &mut [Candidate],
        generation: usize,
        output_dir: &Path,
        callback: &mut C,
    ) -> Result<()> {
        let total = population.len();
        for (i, candidate) in population.iter_mut().enumerate() {
            let output = output_dir.join(format!(
                "generation_{}_individual_{}.wav",
                generation + 1,
                i + 1
            ));
            let blend = self.blender.blend(
                candidate.target_minutes,
                &candidate.segments,
                &candidate.order,
                &output,
            )?;
            candidate.fitness = Some(self.scorer.score(&blend)?);
            callback.on_candidate_evaluated(i + 1, total);
        }
        Ok(())
    }

    fn next_generation(&mut self, elite: &[Candidate]) -> Vec<Candidate> {
        let mut next = elite.to_vec();
        while next.len() < self.params.population_size {
            let (parent1, parent2) = operators::pick_parents(elite, &mut self.rng);
            next.push(operators::recombine(parent1, parent2, &mut self.rng));
        }
        next
    }
}
