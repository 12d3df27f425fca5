use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use core::ops::Sub;

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instant {
    millis: f64,
}

#[cfg(target_arch = "wasm32")]
impl Instant {
    pub fn now() -> Self {
        Self {
            millis: performance_now(),
        }
    }

    pub fn duration_since(&self, earlier: Instant) -> Duration {
        Duration::from_secs_f64((self.millis - earlier.millis).max(0.0) / 1000.0)
    }

    pub fn elapsed(&self) -> Duration {
        Self::now() - *self
    }
}

#[cfg(target_arch = "wasm32")]
impl Sub<Instant> for Instant {
    type Output = Duration;

    fn sub(self, rhs: Instant) -> Duration {
        self.duration_since(rhs)
    }
}

#[cfg(target_arch = "wasm32")]
fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| perf.now())
        .unwrap_or(0.0)
}

/// Turns host frame instants into elapsed scene seconds.
///
/// The clock starts on the first sampled frame. Time spent paused is
/// excluded, so a scene that is hidden and shown again resumes where it
/// left off instead of jumping ahead.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneClock {
    start: Option<Instant>,
    paused_at: Option<Instant>,
    paused_total: Duration,
}

impl SceneClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Elapsed seconds at `now`; the first call starts the clock at zero.
    pub fn sample(&mut self, now: Instant) -> f64 {
        let start = *self.start.get_or_insert(now);
        let reference = self.paused_at.unwrap_or(now);
        let running = reference.duration_since(start);
        running.saturating_sub(self.paused_total).as_secs_f64()
    }

    pub fn pause(&mut self, now: Instant) {
        if self.start.is_some() && self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total += now.duration_since(paused_at);
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_zero() {
        let mut clock = SceneClock::new();
        let t0 = Instant::now();
        assert_eq!(clock.sample(t0), 0.0);
        let later = clock.sample(t0 + Duration::from_millis(1500));
        assert!((later - 1.5).abs() < 1e-9);
    }

    #[test]
    fn paused_time_is_excluded() {
        let mut clock = SceneClock::new();
        let t0 = Instant::now();
        clock.sample(t0);

        clock.pause(t0 + Duration::from_secs(2));
        let frozen = clock.sample(t0 + Duration::from_secs(5));
        assert!((frozen - 2.0).abs() < 1e-9);

        clock.resume(t0 + Duration::from_secs(10));
        let resumed = clock.sample(t0 + Duration::from_secs(11));
        assert!((resumed - 3.0).abs() < 1e-9);
    }

    #[test]
    fn pause_before_start_is_ignored() {
        let mut clock = SceneClock::new();
        let t0 = Instant::now();
        clock.pause(t0);
        assert!(!clock.is_paused());
        assert_eq!(clock.sample(t0 + Duration::from_secs(1)), 0.0);
    }
}
