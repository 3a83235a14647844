//! WaterSurface - spring-chain surface wave simulation
//!
//! One row of damped springs spaced `springGap` apart. Each step integrates
//! every spring, then spreads displacement differences into neighbour
//! velocities, then publishes the displacement buffer to the renderer.
//!
//! The surface sleeps on its own: it only integrates while the simulation
//! clock is inside the activity window opened by the last impact.
//!
//! Orchestration lives here; each concern is in its own file:
//! - init/      - construction and runtime tunables
//! - step/      - integration and spread passes
//! - commands/  - impacts and reset
//! - query/     - interpolated reads used by collision response
//! - render/    - buffer export for the renderer

use crate::core::math::{SurfaceTransform, Vec2};
use crate::domain::config::{SimulationParams, WaterConfig};
use crate::domain::error::ConfigError;
use crate::spatial::samples::SampleBuffer;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/integrate.rs"]
mod integrate;
#[path = "step/spread.rs"]
mod spread;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "query/query.rs"]
mod query;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::WaterVolume;
pub use perf_stats::WavePerfStats;
pub use render_extract::{RenderSink, SurfaceBounds};

use perf_timer::PerfTimer;
use render_extract::RenderState;

/// The simulated water surface
pub struct WaterSurface {
    samples: SampleBuffer,

    // Geometry (fixed after construction)
    spring_extent: u32,
    spring_gap: f32,
    water_height: f32,

    // Placement (can move at runtime)
    transform: SurfaceTransform,

    // Settings
    params: SimulationParams,

    // State
    time: f64,
    unstable_until: f64,
    max_displacement: f32,
    frame: u64,

    render: RenderState,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: WavePerfStats,
}

impl WaterSurface {
    /// Build a surface with `2 * spring_extent + 1` springs, all at rest.
    pub fn new(
        spring_extent: u32,
        spring_gap: f32,
        water_height: f32,
        params: SimulationParams,
    ) -> Result<Self, ConfigError> {
        init::create_water_surface(&WaterConfig::new(spring_extent, spring_gap, water_height, params))
    }

    pub fn from_config(config: &WaterConfig) -> Result<Self, ConfigError> {
        init::create_water_surface(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        let config = WaterConfig::from_json(json)?;
        init::create_water_surface(&config)
    }

    /// Release the sample buffers. Consumes the surface so it can only happen once.
    pub fn shutdown(self) {
        init::release_water_surface(self);
    }

    // === GEOMETRY ===

    /// Number of springs (N)
    pub fn resolution(&self) -> usize { self.samples.len() }

    pub fn spring_extent(&self) -> u32 { self.spring_extent }

    pub fn spring_gap(&self) -> f32 { self.spring_gap }

    pub fn water_height(&self) -> f32 { self.water_height }

    pub fn half_width(&self) -> f32 { self.spring_extent as f32 * self.spring_gap }

    pub fn half_height(&self) -> f32 { self.water_height / 2.0 }

    /// Half-size of the volume, used for collider and mesh sizing
    pub fn extents(&self) -> Vec2 { Vec2::new(self.half_width(), self.half_height()) }

    /// Full size of the volume
    pub fn size(&self) -> Vec2 { Vec2::new(self.half_width() * 2.0, self.water_height) }

    // === SETTINGS ===

    pub fn params(&self) -> SimulationParams { self.params }

    pub fn set_params(&mut self, params: SimulationParams) {
        settings::set_params(self, params);
    }

    pub fn set_spring_constant(&mut self, value: f32) {
        settings::set_spring_constant(self, value);
    }

    pub fn set_damping(&mut self, value: f32) {
        settings::set_damping(self, value);
    }

    pub fn set_spread_speed(&mut self, value: f32) {
        settings::set_spread_speed(self, value);
    }

    pub fn set_stabilizing_time(&mut self, value: f32) {
        settings::set_stabilizing_time(self, value);
    }

    // === PLACEMENT ===

    pub fn transform(&self) -> SurfaceTransform { self.transform }

    /// Move the volume in the world. Non-finite transforms are ignored.
    pub fn set_transform(&mut self, transform: SurfaceTransform) {
        settings::set_transform(self, transform);
    }

    /// World units per local unit along y, taken from the transform
    pub fn vertical_scale(&self) -> f32 { self.transform.vertical_scale() }

    pub fn set_vertical_scale(&mut self, value: f32) {
        settings::set_vertical_scale(self, value);
    }

    /// Map a world point into the local frame every other query expects
    pub fn world_to_local(&self, world: Vec2) -> Vec2 {
        self.transform.world_to_local(world)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> WavePerfStats {
        settings::get_perf_stats(self)
    }

    // === ACTIVITY ===

    /// Simulated seconds elapsed across all positive steps
    pub fn time(&self) -> f64 { self.time }

    pub fn unstable_until(&self) -> f64 { self.unstable_until }

    /// True once the activity window has closed; steps are no-ops then.
    pub fn is_stable(&self) -> bool {
        self.time >= self.unstable_until
    }

    /// Steps that actually integrated
    pub fn frame(&self) -> u64 { self.frame }

    /// Largest displacement after the last active step
    pub fn max_displacement(&self) -> f32 { self.max_displacement }

    // === COMMANDS ===

    /// Overwrite the velocity of every spring within `radius` of `point`
    /// (local frame) with `impulse`, and reopen the activity window.
    ///
    /// Returns how many springs were hit.
    pub fn surface_impact(&mut self, point: Vec2, radius: f32, impulse: f32) -> usize {
        commands::surface_impact(self, point, radius, impulse)
    }

    /// Zero every spring and go stable immediately
    pub fn reset_simulation(&mut self) {
        commands::reset_simulation(self);
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }

    // === QUERIES ===

    /// Continuous sample index for a local point, clamped to `[0, N-1]`
    pub fn sample_index(&self, point: Vec2) -> f32 {
        query::sample_index(self, point)
    }

    /// Local x of spring `idx`
    pub fn sample_x(&self, idx: usize) -> f32 {
        query::sample_x(self, idx)
    }

    /// Live local position of spring `idx` (rest line plus displacement)
    pub fn spring_position(&self, idx: usize) -> Vec2 {
        query::spring_position(self, idx)
    }

    /// Interpolated wave displacement above `point`
    pub fn displacement_at(&self, point: Vec2) -> f32 {
        query::displacement_at(self, point)
    }

    /// Signed vertical distance from `point` to the live surface (negative = below)
    pub fn distance_to_surface(&self, point: Vec2) -> f32 {
        query::distance_to_surface(self, point)
    }

    pub fn displacements(&self) -> &[f32] { &self.samples.displacements }

    pub fn velocities(&self) -> &[f32] { &self.samples.velocities }

    // === RENDER SYNC ===

    /// Attach the adapter that receives the displacement buffer after every step and reset
    pub fn set_render_sink(&mut self, sink: Box<dyn RenderSink>) {
        render_extract::set_render_sink(self, sink);
    }

    pub fn clear_render_sink(&mut self) -> Option<Box<dyn RenderSink>> {
        render_extract::clear_render_sink(self)
    }

    /// Bumped every time the buffer is published
    pub fn render_revision(&self) -> u64 {
        render_extract::render_revision(self)
    }

    /// Local bounding box covering the surface after the last active step
    pub fn render_bounds(&self) -> SurfaceBounds {
        render_extract::render_bounds(self)
    }

    /// Get pointer to displacement array (for JS texture upload)
    pub fn displacement_ptr(&self) -> *const f32 {
        self.samples.displacements.as_ptr()
    }

    pub fn displacement_len(&self) -> usize {
        self.samples.len()
    }

    pub fn displacement_byte_len(&self) -> usize {
        self.samples.displacement_byte_len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
