use wasm_bindgen::prelude::*;

/// Per-step metrics, filled only while perf metrics are enabled.
/// `impacts`/`samples_impacted` count impacts applied since the previous step.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct WavePerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) spread_ms: f64,
    pub(super) sync_ms: f64,
    pub(super) samples_processed: u32,
    pub(super) max_displacement: f32,
    pub(super) skipped_stable: bool,
    /// Ticks skipped while stable since perf metrics were enabled
    pub(super) stable_skips: u32,
    pub(super) impacts: u32,
    pub(super) samples_impacted: u32,
    pending_impacts: u32,
    pending_samples_impacted: u32,
}

impl WavePerfStats {
    pub(crate) fn reset(&mut self) {
        *self = WavePerfStats::default();
    }

    /// Start a fresh snapshot; impacts gathered since the previous step move into it.
    pub(crate) fn begin_step(&mut self) {
        let impacts = self.pending_impacts;
        let samples_impacted = self.pending_samples_impacted;
        let stable_skips = self.stable_skips;
        self.reset();
        self.impacts = impacts;
        self.samples_impacted = samples_impacted;
        self.stable_skips = stable_skips;
    }

    pub(crate) fn record_stable_skip(&mut self) {
        self.skipped_stable = true;
        self.stable_skips = self.stable_skips.saturating_add(1);
    }

    pub(crate) fn record_impact(&mut self, hits: usize) {
        self.pending_impacts = self.pending_impacts.saturating_add(1);
        self.pending_samples_impacted = self.pending_samples_impacted.saturating_add(hits as u32);
    }
}

#[wasm_bindgen]
impl WavePerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn spread_ms(&self) -> f64 { self.spread_ms }
    #[wasm_bindgen(getter)]
    pub fn sync_ms(&self) -> f64 { self.sync_ms }
    #[wasm_bindgen(getter)]
    pub fn samples_processed(&self) -> u32 { self.samples_processed }
    #[wasm_bindgen(getter)]
    pub fn max_displacement(&self) -> f32 { self.max_displacement }
    #[wasm_bindgen(getter)]
    pub fn skipped_stable(&self) -> bool { self.skipped_stable }
    #[wasm_bindgen(getter)]
    pub fn stable_skips(&self) -> u32 { self.stable_skips }
    #[wasm_bindgen(getter)]
    pub fn impacts(&self) -> u32 { self.impacts }
    #[wasm_bindgen(getter)]
    pub fn samples_impacted(&self) -> u32 { self.samples_impacted }
}
