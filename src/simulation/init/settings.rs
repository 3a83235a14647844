use crate::core::math::SurfaceTransform;
use crate::domain::config::SimulationParams;

use super::perf_stats::WavePerfStats;
use super::WaterSurface;

/// Tunables are declared non-negative; NaN and negatives become 0.
fn non_negative(name: &str, value: f32) -> f32 {
    if value >= 0.0 {
        value
    } else {
        log::warn!("{} must be >= 0, got {}; clamping to 0", name, value);
        0.0
    }
}

pub(super) fn sanitize_params(params: SimulationParams) -> SimulationParams {
    SimulationParams {
        spring_constant: non_negative("springConstant", params.spring_constant),
        damping: non_negative("damping", params.damping),
        spread_speed: non_negative("spreadSpeed", params.spread_speed),
        stabilizing_time: non_negative("stabilizingTime", params.stabilizing_time),
    }
}

pub(super) fn set_params(surface: &mut WaterSurface, params: SimulationParams) {
    surface.params = sanitize_params(params);
}

pub(super) fn set_spring_constant(surface: &mut WaterSurface, value: f32) {
    surface.params.spring_constant = non_negative("springConstant", value);
}

pub(super) fn set_damping(surface: &mut WaterSurface, value: f32) {
    surface.params.damping = non_negative("damping", value);
}

pub(super) fn set_spread_speed(surface: &mut WaterSurface, value: f32) {
    surface.params.spread_speed = non_negative("spreadSpeed", value);
}

pub(super) fn set_stabilizing_time(surface: &mut WaterSurface, value: f32) {
    surface.params.stabilizing_time = non_negative("stabilizingTime", value);
}

pub(super) fn set_vertical_scale(surface: &mut WaterSurface, value: f32) {
    if value.is_finite() {
        surface.transform.scale.y = value;
    } else {
        log::warn!("ignoring non-finite vertical scale {}", value);
    }
}

pub(super) fn set_transform(surface: &mut WaterSurface, transform: SurfaceTransform) {
    if transform.is_finite() {
        surface.transform = transform;
    } else {
        log::warn!("ignoring non-finite transform {:?}", transform);
    }
}

pub(super) fn enable_perf_metrics(surface: &mut WaterSurface, enabled: bool) {
    surface.perf_enabled = enabled;
    if !enabled {
        surface.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(surface: &WaterSurface) -> WavePerfStats {
    surface.perf_stats.clone()
}
