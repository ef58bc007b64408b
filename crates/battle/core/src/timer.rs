//! Frame-stepped countdown timer.
//!
//! All delays in the battle engine (opponent decision, attack animation
//! window, death removal, highlight flash) are expressed as countdowns over
//! accumulated delta time. Completion is reported as a return value from
//! [`Timer::tick`] and consumed by typed scheduled-event handling in the
//! session; timers never store callbacks, which keeps single-step tests
//! deterministic.

use std::time::Duration;

/// Single-shot or repeating countdown driven by `tick(dt)`.
#[derive(Clone, Debug)]
pub struct Timer {
    duration: Duration,
    elapsed: Duration,
    active: bool,
    repeat: bool,
}

impl Timer {
    /// Creates an inactive single-shot timer.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            active: false,
            repeat: false,
        }
    }

    /// Creates an inactive repeating timer; it restarts itself on completion.
    pub fn repeating(duration: Duration) -> Self {
        Self {
            repeat: true,
            ..Self::new(duration)
        }
    }

    /// Creates a timer that is already running.
    pub fn started(duration: Duration) -> Self {
        let mut timer = Self::new(duration);
        timer.start();
        timer
    }

    /// Starts (or restarts) the countdown from zero.
    pub fn start(&mut self) {
        self.active = true;
        self.elapsed = Duration::ZERO;
    }

    /// Stops the countdown and zeroes elapsed time.
    pub fn cancel(&mut self) {
        self.active = false;
        self.elapsed = Duration::ZERO;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advances the countdown. Returns true on the tick the countdown
    /// completes; inactive timers are a no-op. A repeating timer restarts
    /// immediately after reporting completion.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.active {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed < self.duration {
            return false;
        }

        if self.repeat {
            self.start();
        } else {
            self.cancel();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn inactive_timer_never_fires() {
        let mut timer = Timer::new(100 * MS);
        assert!(!timer.tick(1000 * MS));
        assert!(!timer.is_active());
    }

    #[test]
    fn fires_once_when_elapsed_reaches_duration() {
        let mut timer = Timer::started(100 * MS);
        assert!(!timer.tick(60 * MS));
        assert!(timer.tick(40 * MS));
        assert!(!timer.is_active());
        // Dead after firing.
        assert!(!timer.tick(1000 * MS));
    }

    #[test]
    fn restart_resets_elapsed() {
        let mut timer = Timer::started(100 * MS);
        timer.tick(90 * MS);
        timer.start();
        assert!(!timer.tick(90 * MS));
        assert!(timer.tick(10 * MS));
    }

    #[test]
    fn cancel_zeroes_progress() {
        let mut timer = Timer::started(100 * MS);
        timer.tick(90 * MS);
        timer.cancel();
        timer.start();
        assert!(!timer.tick(50 * MS));
    }

    #[test]
    fn repeating_timer_restarts_after_firing() {
        let mut timer = Timer::repeating(100 * MS);
        timer.start();
        assert!(timer.tick(100 * MS));
        assert!(timer.is_active());
        assert!(timer.tick(100 * MS));
    }
}
