use thiserror::Error;

/// Rejections raised while building a water surface.
///
/// These are the only failures the engine reports: stepping, impacts and
/// queries clamp their inputs instead of erroring.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("spring extent must be at least 1, got {0}")]
    SpringExtentTooSmall(u32),
    #[error("spring gap must be a positive finite number, got {0}")]
    InvalidSpringGap(f32),
    #[error("water height must be a non-negative finite number, got {0}")]
    InvalidWaterHeight(f32),
    #[error("vertical scale must be finite, got {0}")]
    InvalidVerticalScale(f32),
    #[error("transform origin and horizontal scale must be finite")]
    InvalidTransform,
    #[error("failed to parse water config: {0}")]
    Parse(#[from] serde_json::Error),
}
