use crate::core::math::Vec2;

use super::WaterSurface;

/// Receives the displacement buffer whenever the simulation publishes it.
///
/// The slice is N contiguous f32, index 0 = leftmost spring, laid out for a
/// 1xN single-channel float texture (bilinear, clamped addressing).
pub trait RenderSink {
    fn upload(&mut self, displacements: &[f32]);
}

impl<F: FnMut(&[f32])> RenderSink for F {
    fn upload(&mut self, displacements: &[f32]) {
        self(displacements)
    }
}

/// Local-space box around the animated surface, for frustum culling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceBounds {
    pub center: Vec2,
    pub size: Vec2,
}

impl SurfaceBounds {
    pub(crate) fn at_rest(half_width: f32, water_height: f32) -> Self {
        Self::from_max_displacement(half_width, water_height, 0.0)
    }

    pub(crate) fn from_max_displacement(half_width: f32, water_height: f32, max_dy: f32) -> Self {
        SurfaceBounds {
            center: Vec2::new(0.0, max_dy / 2.0),
            size: Vec2::new(half_width * 2.0, max_dy + water_height),
        }
    }
}

pub(crate) struct RenderState {
    sink: Option<Box<dyn RenderSink>>,
    revision: u64,
    bounds: SurfaceBounds,
}

impl RenderState {
    pub(crate) fn new(bounds: SurfaceBounds) -> Self {
        Self { sink: None, revision: 0, bounds }
    }
}

pub(super) fn set_render_sink(surface: &mut WaterSurface, sink: Box<dyn RenderSink>) {
    surface.render.sink = Some(sink);
}

pub(super) fn clear_render_sink(surface: &mut WaterSurface) -> Option<Box<dyn RenderSink>> {
    surface.render.sink.take()
}

pub(super) fn sync_render(surface: &mut WaterSurface) {
    surface.render.revision = surface.render.revision.wrapping_add(1);
    if let Some(sink) = surface.render.sink.as_mut() {
        sink.upload(&surface.samples.displacements);
    }
}

pub(super) fn render_revision(surface: &WaterSurface) -> u64 {
    surface.render.revision
}

pub(super) fn render_bounds(surface: &WaterSurface) -> SurfaceBounds {
    surface.render.bounds
}

pub(super) fn update_bounds(surface: &mut WaterSurface, max_dy: f32) {
    surface.render.bounds =
        SurfaceBounds::from_max_displacement(surface.half_width(), surface.water_height, max_dy);
}

pub(super) fn reset_bounds(surface: &mut WaterSurface) {
    surface.render.bounds = SurfaceBounds::at_rest(surface.half_width(), surface.water_height);
}
