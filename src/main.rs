use anyhow::Result;
use log::info;
use std::path::PathBuf;
use trackweave::audio::splitter;
use trackweave::config::{AppConfig, ConfigManager};
use trackweave::engines::blending::Blender;
use trackweave::engines::search::{
    ConsoleProgressCallback, RandomScorer, SearchEngine, SearchParams,
};
use trackweave::model::{chroma, MusicgenService};
use trackweave::store::SnippetStore;

fn main() -> Result<()> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "trackweave.toml".to_string());

    let manager = ConfigManager::new();
    if PathBuf::from(&config_path).exists() {
        manager.load_from_file(&config_path)?;
        info!("loaded configuration from '{}'", config_path);
    } else {
        info!("no config file at '{}', using defaults", config_path);
    }

    let config = manager.get();
    run_pipeline(&config)
}

fn run_pipeline(config: &AppConfig) -> Result<()> {
    // Stage 1: cut the raw input audio into fixed-length snippets.
    let snippets = splitter::split_to_snippets(
        &config.paths.input_dir,
        &config.paths.snippets_dir,
        config.blending.snippet_secs,
    )?;
    info!("wrote {} snippets", snippets.len());

    // Stage 2: regenerate every snippet through the model, conditioned on
    // its chroma and the configured text prompts.
    let model = MusicgenService::new(config.model.clone());
    let clips = chroma::generate_chroma_for_snippets(
        &model,
        &config.paths.snippets_dir,
        &config.paths.chroma_dir,
        &config.model.descriptions,
    )?;
    info!("generated {} chroma clips", clips.len());

    // Stage 3: evolve the blended track out of the generated clips.
    let store = SnippetStore::open(&config.paths.chroma_dir)?;
    let params = SearchParams {
        population_size: config.search.population_size,
        generations: config.search.num_generations,
        elite_count: config.search.elite_count,
        target_range: config.blending.min_target_minutes..=config.blending.max_target_minutes,
        seed: config.search.seed,
    };
    let blender = Blender::new(
        config.blending.min_target_minutes,
        config.blending.max_target_minutes,
    );
    let scorer = RandomScorer::new(config.search.seed);

    let mut engine = SearchEngine::new(params, blender, scorer);
    let best = engine.run(&store, &config.paths.output_dir, ConsoleProgressCallback)?;

    for (rank, candidate) in best.iter().enumerate() {
        info!(
            "best solution {}: fitness {:.4}, target {:.2} min, {} segments",
            rank + 1,
            candidate.fitness.unwrap_or(0.0),
            candidate.target_minutes,
            candidate.order.len()
        );
    }

    Ok(())
}
