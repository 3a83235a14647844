use wasm_bindgen::prelude::*;

use crate::core::math::{SurfaceTransform, Vec2};
use crate::domain::config::{SimulationParams, WaterConfig};

use super::perf_stats::WavePerfStats;
use super::WaterSurface;

/// JS-facing water volume. Points are in the volume's local frame.
#[wasm_bindgen]
pub struct WaterVolume {
    core: WaterSurface,
}

#[wasm_bindgen]
impl WaterVolume {
    /// Create a volume with default simulation tunables
    #[wasm_bindgen(constructor)]
    pub fn new(spring_extent: u32, spring_gap: f32, water_height: f32) -> Result<WaterVolume, JsValue> {
        let core = WaterSurface::new(spring_extent, spring_gap, water_height, SimulationParams::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<WaterVolume, JsValue> {
        let core = WaterSurface::from_config_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn resolution(&self) -> usize { self.core.resolution() }

    #[wasm_bindgen(getter)]
    pub fn half_width(&self) -> f32 { self.core.half_width() }

    #[wasm_bindgen(getter)]
    pub fn half_height(&self) -> f32 { self.core.half_height() }

    #[wasm_bindgen(getter)]
    pub fn size_x(&self) -> f32 { self.core.size().x }

    #[wasm_bindgen(getter)]
    pub fn size_y(&self) -> f32 { self.core.size().y }

    #[wasm_bindgen(getter)]
    pub fn is_stable(&self) -> bool { self.core.is_stable() }

    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f64 { self.core.time() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn max_displacement(&self) -> f32 { self.core.max_displacement() }

    pub fn set_spring_constant(&mut self, value: f32) {
        self.core.set_spring_constant(value);
    }

    pub fn set_damping(&mut self, value: f32) {
        self.core.set_damping(value);
    }

    pub fn set_spread_speed(&mut self, value: f32) {
        self.core.set_spread_speed(value);
    }

    pub fn set_stabilizing_time(&mut self, value: f32) {
        self.core.set_stabilizing_time(value);
    }

    pub fn set_vertical_scale(&mut self, value: f32) {
        self.core.set_vertical_scale(value);
    }

    /// Place the volume in the world; `scale_y` also scales surface distances
    pub fn set_transform(&mut self, origin_x: f32, origin_y: f32, scale_x: f32, scale_y: f32) {
        self.core
            .set_transform(SurfaceTransform::new(Vec2::new(origin_x, origin_y), Vec2::new(scale_x, scale_y)));
    }

    /// Current geometry and tunables as a config JSON document
    pub fn config_json(&self) -> String {
        WaterConfig {
            spring_extent: self.core.spring_extent(),
            spring_gap: self.core.spring_gap(),
            water_height: self.core.water_height(),
            transform: self.core.transform(),
            params: self.core.params(),
        }
        .to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> WavePerfStats {
        self.core.perf_stats()
    }

    /// Returns the number of springs hit
    pub fn surface_impact(&mut self, x: f32, y: f32, radius: f32, impulse: f32) -> u32 {
        self.core.surface_impact(Vec2::new(x, y), radius, impulse) as u32
    }

    pub fn displacement_at(&self, x: f32, y: f32) -> f32 {
        self.core.displacement_at(Vec2::new(x, y))
    }

    pub fn distance_to_surface(&self, x: f32, y: f32) -> f32 {
        self.core.distance_to_surface(Vec2::new(x, y))
    }

    pub fn step(&mut self, dt: f32) {
        self.core.step(dt);
    }

    pub fn reset_simulation(&mut self) {
        self.core.reset_simulation();
    }

    // === RENDER SYNC API ===
    // JS reads the buffer straight out of wasm memory; poll the revision to
    // know when to re-upload the displacement texture.

    #[wasm_bindgen(getter)]
    pub fn render_revision(&self) -> u64 { self.core.render_revision() }

    /// Get pointer to displacement array (for texture upload)
    pub fn displacement_ptr(&self) -> *const f32 {
        self.core.displacement_ptr()
    }

    pub fn displacement_len(&self) -> usize {
        self.core.displacement_len()
    }

    pub fn displacement_byte_len(&self) -> usize {
        self.core.displacement_byte_len()
    }
}
