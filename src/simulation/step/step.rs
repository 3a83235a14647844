use super::integrate::integrate_springs;
use super::render_extract;
use super::spread::spread_waves;
use super::{PerfTimer, WaterSurface};

pub(super) fn step(surface: &mut WaterSurface, dt: f32) {
    // Also rejects NaN.
    if !(dt > 0.0) {
        return;
    }

    let perf_on = surface.perf_enabled;
    if perf_on {
        surface.perf_stats.begin_step();
    }

    // Stability is judged at the start of the tick; the clock moves either way.
    if surface.is_stable() {
        surface.time += dt as f64;
        if perf_on {
            surface.perf_stats.record_stable_skip();
        }
        return;
    }

    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === PASS 1: SPRINGS ===
    let params = surface.params;
    let max_dy = if perf_on {
        let (max_dy, ms) = PerfTimer::time(|| integrate_springs(&mut surface.samples, &params, dt));
        surface.perf_stats.integrate_ms = ms;
        max_dy
    } else {
        integrate_springs(&mut surface.samples, &params, dt)
    };
    surface.max_displacement = max_dy;
    render_extract::update_bounds(surface, max_dy);

    // === PASS 2: SPREAD ===
    // Reads the displacement snapshot left by pass 1, writes velocity only.
    if perf_on {
        let ((), ms) = PerfTimer::time(|| spread_waves(&mut surface.samples, params.spread_speed, dt));
        surface.perf_stats.spread_ms = ms;
    } else {
        spread_waves(&mut surface.samples, params.spread_speed, dt);
    }

    // Publish to the renderer
    if perf_on {
        let t0 = PerfTimer::start();
        render_extract::sync_render(surface);
        surface.perf_stats.sync_ms = t0.elapsed_ms();
    } else {
        render_extract::sync_render(surface);
    }

    surface.time += dt as f64;
    surface.frame += 1;

    if let Some(start) = step_start {
        surface.perf_stats.samples_processed = surface.samples.len() as u32;
        surface.perf_stats.max_displacement = max_dy;
        surface.perf_stats.step_ms = start.elapsed_ms();
    }
}
