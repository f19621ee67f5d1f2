use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("a cone needs at least 3 segments, got {0}")]
    TooFewSegments(usize),
    #[error("cone radius and height must be positive (radius {radius}, height {height})")]
    InvalidDimensions { radius: f32, height: f32 },
}
