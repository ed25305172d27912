use std::fs;
use std::path::{Path, PathBuf};
use trackweave::audio::{io, AudioClip};
use trackweave::engines::blending::Blender;
use trackweave::engines::search::{
    FitnessScorer, ProgressCallback, RandomScorer, SearchEngine, SearchParams,
};
use trackweave::error::Result;
use trackweave::store::SnippetStore;

const SAMPLE_RATE: u32 = 8000;

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("trackweave_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn snippet_store(dir: &Path, count: usize, duration_ms: u64) -> SnippetStore {
    let snippets = dir.join("snippets");
    fs::create_dir_all(&snippets).unwrap();
    for i in 0..count {
        let path = snippets.join(format!("snippet_{}.wav", i + 1));
        io::write_wav(&path, &AudioClip::silence(duration_ms, SAMPLE_RATE, 1)).unwrap();
    }
    SnippetStore::open(&snippets).unwrap()
}

/// Short targets so blends stay tiny: 0.05..0.1 min is 3 to 6 seconds.
fn test_params(seed: u64) -> SearchParams {
    SearchParams {
        population_size: 6,
        generations: 3,
        elite_count: 2,
        target_range: 0.05..=0.1,
        seed: Some(seed),
    }
}

fn test_blender() -> Blender {
    Blender::new(0.05, 0.1)
}

#[derive(Default)]
struct CountingCallback {
    generations_started: usize,
    generations_completed: usize,
    evaluated_per_generation: Vec<usize>,
    current: usize,
}

impl ProgressCallback for CountingCallback {
    fn on_generation_start(&mut self, _generation: usize) {
        self.generations_started += 1;
        self.current = 0;
    }

    fn on_candidate_evaluated(&mut self, candidate_num: usize, _total: usize) {
        self.current = candidate_num;
    }

    fn on_generation_complete(&mut self, _generation: usize, _best_fitness: f64) {
        self.generations_completed += 1;
        self.evaluated_per_generation.push(self.current);
    }
}

/// Scorer that hands out strictly increasing scores, so the best candidate
/// of a generation is always the last one evaluated.
#[derive(Default)]
struct SequenceScorer {
    next: f64,
}

impl FitnessScorer for SequenceScorer {
    fn score(&mut self, _blend: &AudioClip) -> Result<f64> {
        self.next += 0.1;
        Ok(self.next)
    }
}

#[test]
fn test_run_returns_sorted_elite_pair() {
    let dir = test_dir("elite");
    let store = snippet_store(&dir, 4, 2000);
    let output_dir = dir.join("output");

    let mut engine = SearchEngine::new(test_params(42), test_blender(), RandomScorer::new(Some(42)));
    let elite = engine
        .run(&store, &output_dir, CountingCallback::default())
        .unwrap();

    assert_eq!(elite.len(), 2, "selection must retain exactly the top 2");
    let first = elite[0].fitness.unwrap();
    let second = elite[1].fitness.unwrap();
    assert!(first >= second, "elite must be sorted by fitness descending");
}

#[test]
fn test_population_size_constant_across_generations() {
    let dir = test_dir("population");
    let store = snippet_store(&dir, 4, 2000);
    let output_dir = dir.join("output");

    let mut engine = SearchEngine::new(test_params(7), test_blender(), RandomScorer::new(Some(7)));
    let mut callback = CountingCallback::default();
    engine.run(&store, &output_dir, &mut callback).unwrap();

    assert_eq!(callback.generations_started, 3);
    assert_eq!(callback.generations_completed, 3);
    assert_eq!(callback.evaluated_per_generation, vec![6, 6, 6]);
}

#[test]
fn test_generation_and_best_solution_files_written() {
    let dir = test_dir("files");
    let store = snippet_store(&dir, 4, 2000);
    let output_dir = dir.join("output");

    let mut engine = SearchEngine::new(test_params(3), test_blender(), RandomScorer::new(Some(3)));
    engine
        .run(&store, &output_dir, CountingCallback::default())
        .unwrap();

    for generation in 1..=3 {
        for individual in 1..=6 {
            let path = output_dir.join(format!(
                "generation_{}_individual_{}.wav",
                generation, individual
            ));
            assert!(path.exists(), "missing {}", path.display());
        }
    }
    assert!(output_dir.join("best_solution_1.wav").exists());
    assert!(output_dir.join("best_solution_2.wav").exists());

    // Every render respects the target ceiling of 0.1 min = 6 s.
    let best = io::read_wav(output_dir.join("best_solution_1.wav")).unwrap();
    assert!(best.len_ms() <= 6000);
}

#[test]
fn test_top_two_by_fitness_are_retained() {
    let dir = test_dir("top_two");
    let store = snippet_store(&dir, 4, 2000);
    let output_dir = dir.join("output");

    let mut params = test_params(1);
    params.generations = 1;

    let mut engine = SearchEngine::new(params, test_blender(), SequenceScorer::default());
    let elite = engine
        .run(&store, &output_dir, CountingCallback::default())
        .unwrap();

    // Six candidates scored 0.1..0.6; the retained pair is 0.6 then 0.5.
    assert_eq!(elite.len(), 2);
    assert!((elite[0].fitness.unwrap() - 0.6).abs() < 1e-9);
    assert!((elite[1].fitness.unwrap() - 0.5).abs() < 1e-9);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let dir = test_dir("seeded");
    let store = snippet_store(&dir, 4, 2000);

    let mut first = SearchEngine::new(test_params(99), test_blender(), RandomScorer::new(Some(99)));
    let elite_a = first
        .run(&store, &dir.join("run_a"), CountingCallback::default())
        .unwrap();

    let mut second =
        SearchEngine::new(test_params(99), test_blender(), RandomScorer::new(Some(99)));
    let elite_b = second
        .run(&store, &dir.join("run_b"), CountingCallback::default())
        .unwrap();

    for (a, b) in elite_a.iter().zip(&elite_b) {
        assert_eq!(a.fitness, b.fitness);
        assert_eq!(a.target_minutes, b.target_minutes);
        assert_eq!(a.order, b.order);
    }
}
