//! Facade checks for `wasm-pack test --node`.
#![cfg(target_arch = "wasm32")]

use choco_water_engine::WaterVolume;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn facade_splash_and_reset() {
    let mut volume = WaterVolume::new(8, 0.25, 2.0).expect("valid volume");
    assert_eq!(volume.resolution(), 17);
    assert!(volume.is_stable());

    assert!(volume.surface_impact(0.0, 1.0, 0.3, -2.0) > 0);
    volume.step(1.0 / 60.0);
    assert!(!volume.is_stable());
    assert!(volume.displacement_at(0.0, 0.0) < 0.0);
    assert_eq!(volume.render_revision(), 1);

    volume.reset_simulation();
    assert!(volume.is_stable());
    assert_eq!(volume.displacement_at(0.0, 0.0), 0.0);
}

#[wasm_bindgen_test]
fn facade_rejects_bad_config() {
    assert!(WaterVolume::new(0, 0.25, 2.0).is_err());
    assert!(WaterVolume::from_config_json("{\"springGap\": -1}".to_string()).is_err());
}
