// `Instant` panics on wasm32-unknown-unknown, so the browser clock stands in there.
#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn stamp() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn stamp() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
fn since_ms(started: &Stamp) -> f64 {
    js_sys::Date::now() - started
}

#[cfg(not(target_arch = "wasm32"))]
fn since_ms(started: &Stamp) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { started: stamp() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        since_ms(&self.started)
    }

    /// Run `f`, returning its output and how long it took
    pub(crate) fn time<T>(f: impl FnOnce() -> T) -> (T, f64) {
        let timer = PerfTimer::start();
        let out = f();
        (out, timer.elapsed_ms())
    }
}
