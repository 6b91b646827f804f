/// Error type shared by every fallible core operation
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeometryError {
    /// Tessellation needs between 1 and `MAX_SEGMENTS` subdivisions
    #[error(
        "segments must be between 1 and {max}, got {segments}",
        max = crate::geometry::MAX_SEGMENTS
    )]
    InvalidSegments { segments: i32 },

    #[error("shape parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f32 },

    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
