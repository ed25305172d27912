//! trackweave evolves a finished music track out of short generated audio
//! snippets. Snippets are cut from raw input audio, regenerated through a
//! pretrained melody-conditioned model, and then ordered and trimmed by a
//! small genetic search until the blend hits a target track length.

pub mod audio;
pub mod config;
pub mod engines;
pub mod error;
pub mod model;
pub mod store;

pub use error::{Result, TrackweaveError};
