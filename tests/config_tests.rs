use std::fs;
use trackweave::config::blending::BlendConfig;
use trackweave::config::model::ModelConfig;
use trackweave::config::search::SearchConfig;
use trackweave::config::traits::ConfigSection;
use trackweave::config::{AppConfig, ConfigManager};

#[test]
fn test_defaults_validate() {
    assert!(AppConfig::default().validate().is_ok());
}

#[test]
fn test_search_config_bounds() {
    let mut config = SearchConfig::default();
    assert!(config.validate().is_ok());

    config.population_size = 3;
    assert!(config.validate().is_err());

    config.population_size = 10;
    config.num_generations = 0;
    assert!(config.validate().is_err());

    config.num_generations = 5;
    config.elite_count = 1;
    assert!(config.validate().is_err());

    config.elite_count = 10;
    assert!(config.validate().is_err(), "elite must be below population");
}

#[test]
fn test_blend_config_target_range() {
    let mut config = BlendConfig::default();
    assert!(config.validate().is_ok());

    config.min_target_minutes = 4.5;
    config.max_target_minutes = 3.5;
    assert!(config.validate().is_err());

    config.min_target_minutes = -1.0;
    assert!(config.validate().is_err());

    let mut config = BlendConfig::default();
    config.snippet_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_model_config_requires_descriptions() {
    let mut config = ModelConfig::default();
    assert!(config.validate().is_ok());

    config.descriptions.clear();
    assert!(config.validate().is_err());

    let mut config = ModelConfig::default();
    config.command.clear();
    assert!(config.validate().is_err());
}

#[test]
fn test_manager_round_trips_through_toml() {
    let path = std::env::temp_dir().join(format!("trackweave_config_{}.toml", std::process::id()));

    let manager = ConfigManager::new();
    manager
        .update(|config| {
            config.search.population_size = 24;
            config.search.seed = Some(1234);
            config.blending.snippet_secs = 5;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_from_file(&path).unwrap();
    let config = reloaded.get();

    assert_eq!(config.search.population_size, 24);
    assert_eq!(config.search.seed, Some(1234));
    assert_eq!(config.blending.snippet_secs, 5);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_manager_rejects_invalid_file() {
    let path = std::env::temp_dir().join(format!("trackweave_bad_{}.toml", std::process::id()));
    fs::write(&path, "[search]\npopulation_size = 1\n").unwrap();

    let manager = ConfigManager::new();
    assert!(manager.load_from_file(&path).is_err());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_update_rejects_invalid_change() {
    let manager = ConfigManager::new();
    let result = manager.update(|config| {
        config.search.population_size = 2;
    });
    assert!(result.is_err());
}
