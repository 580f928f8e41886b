// crates/flagdex-core/src/debounce.rs

//! Delay-and-coalesce primitive for user input.
//!
//! Each [`Debouncer::submit`] (re)starts a countdown; only when the
//! countdown elapses without another submission does the observable value
//! update. Polling is explicit so hosts keep control of their event loop,
//! and [`Debouncer::poll_at`] takes the clock as a parameter so timing is
//! testable without sleeping.
//!
//! `std::time::Instant` does not work on `wasm32-unknown-unknown`; hosts
//! on that target drive their own timers and use
//! [`Debouncer::set_immediate`] instead of `submit`/`poll`.

use std::time::{Duration, Instant};

/// Quiet period before a submitted value becomes observable.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

#[derive(Debug)]
struct Pending {
    value: String,
    deadline: Instant,
}

/// Coalesces rapid submissions into one settled value.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
    settled: String,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            settled: String::new(),
        }
    }

    /// Submit a new value, restarting the countdown.
    pub fn submit(&mut self, value: &str) {
        self.pending = Some(Pending {
            value: value.to_string(),
            deadline: Instant::now() + self.delay,
        });
    }

    /// Settle the pending value if its countdown has elapsed.
    ///
    /// Returns `true` when the settled value changed.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// [`Debouncer::poll`] with an explicit clock.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.pending.take() {
            Some(p) if p.deadline <= now => {
                let changed = p.value != self.settled;
                self.settled = p.value;
                changed
            }
            Some(p) => {
                self.pending = Some(p);
                false
            }
            None => false,
        }
    }

    /// Bypass the countdown entirely: drop anything pending and settle
    /// `value` now. Returns `true` when the settled value changed.
    pub fn set_immediate(&mut self, value: &str) -> bool {
        self.pending = None;
        let changed = value != self.settled;
        if changed {
            self.settled = value.to_string();
        }
        changed
    }

    /// Drop any pending countdown without settling it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The last settled value.
    pub fn value(&self) -> &str {
        &self.settled
    }

    /// Whether a countdown is currently running.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(250);

    #[test]
    fn settles_only_after_quiet_period() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.submit("sam");

        assert!(!d.poll_at(t0 + Duration::from_millis(100)));
        assert_eq!(d.value(), "");

        assert!(d.poll_at(t0 + DELAY));
        assert_eq!(d.value(), "sam");
    }

    #[test]
    fn resubmission_restarts_countdown_and_coalesces() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.submit("s");
        d.submit("sa");
        d.submit("sam");

        // The first deadline passing settles the *latest* value.
        assert!(d.poll_at(t0 + DELAY + Duration::from_millis(10)));
        assert_eq!(d.value(), "sam");
        assert!(!d.is_pending());
    }

    #[test]
    fn poll_without_change_reports_false() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.submit("sam");
        assert!(d.poll_at(t0 + DELAY));
        // Same value again: settles, but nothing changed.
        d.submit("sam");
        assert!(!d.poll_at(t0 + DELAY + DELAY));
        assert_eq!(d.value(), "sam");
    }

    #[test]
    fn cancel_drops_pending_value() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.submit("sam");
        d.cancel();
        assert!(!d.poll_at(t0 + DELAY + DELAY));
        assert_eq!(d.value(), "");
    }

    #[test]
    fn set_immediate_bypasses_countdown() {
        let mut d = Debouncer::new(DELAY);
        d.submit("pending");
        assert!(d.set_immediate("now"));
        assert_eq!(d.value(), "now");
        assert!(!d.is_pending());
        assert!(!d.set_immediate("now"));
    }
}
