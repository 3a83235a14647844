//! Water volume configuration.
//!
//! Geometry (`springExtent`, `springGap`, `waterHeight`) is fixed once the
//! surface is built. The [`SimulationParams`] block can be swapped at any time
//! and takes effect on the next step.

use serde::{Deserialize, Serialize};

use crate::core::math::SurfaceTransform;

use super::error::ConfigError;

/// Tunables read by every simulation step
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationParams {
    /// Stiffness. High values bounce harder and can diverge.
    pub spring_constant: f32,
    /// Velocity damping; higher feels thicker.
    pub damping: f32,
    /// Horizontal propagation rate
    pub spread_speed: f32,
    /// Seconds the surface keeps simulating after an impact
    pub stabilizing_time: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            spring_constant: 50.0,
            damping: 6.0,
            spread_speed: 600.0,
            stabilizing_time: 5.0,
        }
    }
}

impl SimulationParams {
    /// Zero every coupling term. Steps then reduce to `d += v * dt`.
    pub fn frozen(stabilizing_time: f32) -> Self {
        Self {
            spring_constant: 0.0,
            damping: 0.0,
            spread_speed: 0.0,
            stabilizing_time,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaterConfig {
    /// Springs on one side of the centre spring
    pub spring_extent: u32,
    /// Horizontal distance between neighbouring springs (local units)
    pub spring_gap: f32,
    /// Full height of the volume (local units)
    pub water_height: f32,
    /// World placement; `transform.scale.y` scales surface distances
    pub transform: SurfaceTransform,
    pub params: SimulationParams,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            spring_extent: 1,
            spring_gap: 0.1,
            water_height: 5.0,
            transform: SurfaceTransform::default(),
            params: SimulationParams::default(),
        }
    }
}

impl WaterConfig {
    pub fn new(spring_extent: u32, spring_gap: f32, water_height: f32, params: SimulationParams) -> Self {
        Self {
            spring_extent,
            spring_gap,
            water_height,
            transform: SurfaceTransform::default(),
            params,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WaterConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Check geometry before anything is allocated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spring_extent < 1 {
            return Err(ConfigError::SpringExtentTooSmall(self.spring_extent));
        }
        if !(self.spring_gap.is_finite() && self.spring_gap > 0.0) {
            return Err(ConfigError::InvalidSpringGap(self.spring_gap));
        }
        if !(self.water_height.is_finite() && self.water_height >= 0.0) {
            return Err(ConfigError::InvalidWaterHeight(self.water_height));
        }
        let scale_y = self.transform.vertical_scale();
        if !scale_y.is_finite() {
            return Err(ConfigError::InvalidVerticalScale(scale_y));
        }
        if !self.transform.is_finite() {
            return Err(ConfigError::InvalidTransform);
        }
        Ok(())
    }

    /// Sample count N = 2 * extent + 1
    pub fn resolution(&self) -> usize {
        2 * self.spring_extent as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = WaterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.resolution(), 3);
    }

    #[test]
    fn rejects_zero_extent() {
        let config = WaterConfig { spring_extent: 0, ..WaterConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::SpringExtentTooSmall(0))));
    }

    #[test]
    fn rejects_non_positive_gap() {
        for gap in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let config = WaterConfig { spring_gap: gap, ..WaterConfig::default() };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidSpringGap(_))));
        }
    }

    #[test]
    fn rejects_negative_height_but_allows_zero() {
        let config = WaterConfig { water_height: -1.0, ..WaterConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidWaterHeight(_))));

        let flat = WaterConfig { water_height: 0.0, ..WaterConfig::default() };
        assert!(flat.validate().is_ok());
    }

    #[test]
    fn rejects_non_finite_transform() {
        let mut config = WaterConfig::default();
        config.transform.scale.y = f32::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidVerticalScale(_))));

        config.transform.scale.y = 1.0;
        config.transform.origin.x = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTransform)));
    }

    #[test]
    fn transform_loads_from_json() {
        let config = WaterConfig::from_json(
            r#"{"transform": {"origin": {"x": 3, "y": -1}, "scale": {"x": 1, "y": 2}}}"#,
        )
        .expect("config should parse");
        assert_eq!(config.transform.origin, crate::core::math::Vec2::new(3.0, -1.0));
        assert_eq!(config.transform.vertical_scale(), 2.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = WaterConfig::from_json(r#"{"springExtent": 64, "params": {"damping": 2.5}}"#)
            .expect("config should parse");
        assert_eq!(config.spring_extent, 64);
        assert_eq!(config.spring_gap, 0.1);
        assert_eq!(config.params.damping, 2.5);
        assert_eq!(config.params.spread_speed, 600.0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = WaterConfig::from_json("{ springExtent: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
