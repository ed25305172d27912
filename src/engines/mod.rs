pub mod blending;
pub mod search;
