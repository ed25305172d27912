pub mod blending;
pub mod manager;
pub mod model;
pub mod paths;
pub mod search;
pub mod traits;

pub use manager::{AppConfig, ConfigManager};
