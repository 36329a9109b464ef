use crate::color::Attr;

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name}: minimum {min} exceeds maximum {max}")]
    InvertedBounds {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidStep { name: &'static str, value: f32 },
    #[error("clip planes must satisfy 0 < near < far, got near = {near}, far = {far}")]
    ClipPlanes { near: f32, far: f32 },
    #[error("field of view must lie in (0, 180) degrees, got {0}")]
    FieldOfView(f32),
    #[error("light height {0} is too close to zero to cast shadows")]
    LightHeight(f32),
    #[error("face colour {0:?} is the same as the edge colour")]
    PaletteCollision(Attr),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
