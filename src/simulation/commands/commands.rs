use crate::core::math::Vec2;

use super::query;
use super::render_extract;
use super::WaterSurface;

/// Index range `[start, end)` that can possibly lie within `radius` of `point`.
///
/// Bounds the circle's horizontal extent through the index mapping, so the
/// narrow phase only looks at O(radius / gap) springs.
pub(super) fn candidate_range(surface: &WaterSurface, point: Vec2, radius: f32) -> (usize, usize) {
    let n = surface.samples.len();
    let u_left = query::sample_index(surface, Vec2::new(point.x - radius, point.y));
    let u_right = query::sample_index(surface, Vec2::new(point.x + radius, point.y));

    let start = (u_left.floor() as usize).min(n);
    // `ceil` is inclusive here so the last spring stays reachable.
    let end = (u_right.ceil() as usize).saturating_add(1).min(n);
    (start, end.max(start))
}

pub(super) fn surface_impact(surface: &mut WaterSurface, point: Vec2, radius: f32, impulse: f32) -> usize {
    let mut hits = 0usize;

    if radius > 0.0 {
        let (start, end) = candidate_range(surface, point, radius);
        for idx in start..end {
            // Distance is measured to the live spring, not the rest line.
            let spring = query::spring_position(surface, idx);
            if point.distance(spring) < radius {
                // Overwrite: impacts between steps do not accumulate.
                surface.samples.velocities[idx] = impulse;
                hits += 1;
            }
        }
    }

    surface.unstable_until = surface.time + surface.params.stabilizing_time as f64;

    if surface.perf_enabled {
        surface.perf_stats.record_impact(hits);
    }
    log::trace!(
        "surface impact at ({}, {}) r={} impulse={}: {} springs hit, unstable until {}",
        point.x,
        point.y,
        radius,
        impulse,
        hits,
        surface.unstable_until
    );

    hits
}

pub(super) fn reset_simulation(surface: &mut WaterSurface) {
    surface.unstable_until = 0.0;
    surface.samples.clear();
    surface.max_displacement = 0.0;
    render_extract::reset_bounds(surface);
    render_extract::sync_render(surface);
    log::debug!("water surface reset ({} springs)", surface.samples.len());
}
