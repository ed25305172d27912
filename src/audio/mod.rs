pub mod clip;
pub mod io;
pub mod splitter;

pub use clip::AudioClip;
