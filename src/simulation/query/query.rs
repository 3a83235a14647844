use crate::core::math::{clamp01, lerp, Vec2};

use super::WaterSurface;

/// Map a local point to a continuous index in `[0, N-1]`.
///
/// `[-halfWidth, +halfWidth]` spans the whole chain; anything outside clamps
/// to the nearest end.
pub(super) fn sample_index(surface: &WaterSurface, point: Vec2) -> f32 {
    let last = (surface.samples.len() - 1) as f32;
    let u = (point.x / surface.half_width() + 1.0) * 0.5;
    clamp01(u) * last
}

pub(super) fn sample_x(surface: &WaterSurface, idx: usize) -> f32 {
    surface.spring_gap * (idx as f32 - surface.spring_extent as f32)
}

pub(super) fn spring_position(surface: &WaterSurface, idx: usize) -> Vec2 {
    Vec2::new(
        sample_x(surface, idx),
        surface.half_height() + surface.samples.displacement(idx),
    )
}

pub(super) fn displacement_at(surface: &WaterSurface, point: Vec2) -> f32 {
    let u = sample_index(surface, point);
    let last = surface.samples.len() - 1;
    let lo = (u.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    let t = u - lo as f32;
    lerp(surface.samples.displacement(lo), surface.samples.displacement(hi), t)
}

pub(super) fn distance_to_surface(surface: &WaterSurface, point: Vec2) -> f32 {
    let surface_y = surface.half_height() + displacement_at(surface, point);
    (point.y - surface_y) * surface.transform.vertical_scale()
}
