use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackweaveError {
    #[error("Target length {actual} min is outside the accepted range [{min}, {max}] min")]
    TargetLength { actual: f64, min: f64, max: f64 },

    #[error("Channel count mismatch: expected {expected}, got {actual}")]
    ChannelMismatch { expected: u16, actual: u16 },

    #[error("Sample rate mismatch: expected {expected} Hz, got {actual} Hz")]
    SampleRateMismatch { expected: u32, actual: u32 },

    #[error("No snippets found in '{0}'")]
    EmptyStore(String),

    #[error("Blend error: {0}")]
    Blend(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackweaveError>;
