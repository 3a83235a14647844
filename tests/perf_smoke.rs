use choco_water_engine::WaterVolume;

#[test]
fn perf_smoke_step() {
    let mut volume = WaterVolume::new(256, 0.05, 4.0).expect("valid geometry");
    volume.enable_perf_metrics(true);
    for i in 0..16 {
        let x = -12.0 + i as f32 * 1.5;
        volume.surface_impact(x, 2.0, 0.2, 5.0);
    }
    volume.step(1.0 / 60.0);
    let stats = volume.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.samples_processed(), 513);
    assert_eq!(stats.impacts(), 16);
}
