/// Wall-clock timer: `Date.now()` in the browser, `Instant` natively.
///
/// Only used while perf metrics are enabled; `step.rs` times the world step
/// and the collision/sink bookkeeping separately.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    /// Capture the current wall-clock instant.
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { start: std::time::Instant::now() }
        }
    }

    /// Milliseconds since `start`. `Date.now()` has 1 ms resolution, so short
    /// frames read as 0 in the browser.
    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Run `f` and return its result with the elapsed milliseconds.
    pub(crate) fn measure<T>(f: impl FnOnce() -> T) -> (T, f64) {
        let timer = Self::start();
        let out = f();
        (out, timer.elapsed_ms())
    }
}
