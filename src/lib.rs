//! ChocoWater Engine - spring-chain surface waves for 2D water volumes
//!
//! The surface is a row of damped springs. Impacts kick spring velocities,
//! each fixed step integrates and spreads the disturbance sideways, and the
//! surface puts itself to sleep once its activity window runs out.
//!
//! Layout:
//! - core/        - 2D math and the local/world transform
//! - domain/      - configuration and errors
//! - spatial/     - spring sample storage
//! - simulation/  - the engine and its wasm facade
//! - systems/     - collision response built on the public API

pub mod core;
pub mod domain;
pub mod spatial;
pub mod simulation;
pub mod systems;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🌊 ChocoWater WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::math::{SurfaceTransform, Vec2};
pub use domain::config::{SimulationParams, WaterConfig};
pub use domain::error::ConfigError;
pub use simulation::{RenderSink, SurfaceBounds, WaterSurface, WaterVolume, WavePerfStats};
pub use systems::trigger::{BodyContact, BodyMotion, TriggerSettings, WaterTrigger};
