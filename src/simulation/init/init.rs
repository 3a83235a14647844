use crate::domain::config::WaterConfig;
use crate::domain::error::ConfigError;
use crate::spatial::samples::SampleBuffer;

use super::perf_stats::WavePerfStats;
use super::settings;
use super::render_extract::{RenderState, SurfaceBounds};
use super::WaterSurface;

pub(super) fn create_water_surface(config: &WaterConfig) -> Result<WaterSurface, ConfigError> {
    // Reject before allocating anything.
    config.validate()?;

    let resolution = config.resolution();
    let half_width = config.spring_extent as f32 * config.spring_gap;

    let surface = WaterSurface {
        samples: SampleBuffer::new(resolution),
        spring_extent: config.spring_extent,
        spring_gap: config.spring_gap,
        water_height: config.water_height,
        transform: config.transform,
        // Constructor input gets the same clamp as the runtime setters.
        params: settings::sanitize_params(config.params),
        time: 0.0,
        unstable_until: 0.0,
        max_displacement: 0.0,
        frame: 0,

        render: RenderState::new(SurfaceBounds::at_rest(half_width, config.water_height)),
        perf_enabled: false,
        perf_stats: WavePerfStats::default(),
    };

    log::debug!(
        "water surface initialized: {} springs, extents ({}, {})",
        resolution,
        half_width,
        config.water_height / 2.0
    );

    Ok(surface)
}

pub(super) fn release_water_surface(surface: WaterSurface) {
    log::debug!(
        "water surface released after {} frames ({} springs)",
        surface.frame,
        surface.samples.len()
    );
    drop(surface);
}
