pub mod candidate;
pub mod engine;
pub mod fitness;
pub mod operators;
pub mod progress;

pub use candidate::Candidate;
pub use engine::{ProgressCallback, SearchEngine, SearchParams};
pub use fitness::{FitnessScorer, RandomScorer};
pub use progress::ConsoleProgressCallback;
