pub mod chroma;
pub mod musicgen;
pub mod stitch;

pub use musicgen::{MelodyModel, MusicgenService};
