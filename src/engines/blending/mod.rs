pub mod blender;

pub use blender::{blend_directory, Blender, MAX_TARGET_MINUTES, MIN_TARGET_MINUTES};
