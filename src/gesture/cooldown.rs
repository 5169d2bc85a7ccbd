//! Shared click cooldown.

use std::time::{Duration, Instant};

/// Default minimum interval between two discrete click actions.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(500);

/// Gate that spaces discrete actions apart in time.
///
/// A single timestamp is shared by every discrete action: a left click
/// opens the same window that suppresses a later right click, and vice
/// versa. Continuous cursor moves never consult the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooldownGate {
    /// When the last discrete action fired. `None` until the first one,
    /// so a fresh gate is immediately eligible.
    last_fired: Option<Instant>,
    /// Minimum interval between discrete actions
    cooldown: Duration,
}

impl CooldownGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            last_fired: None,
            cooldown,
        }
    }

    /// Whether a discrete action may fire at `now`.
    ///
    /// Strictly more than the cooldown must have elapsed; at exactly the
    /// cooldown boundary the gate stays closed.
    pub fn ready(&self, now: Instant) -> bool {
        match self.last_fired {
            None => true,
            Some(fired) => now.duration_since(fired) > self.cooldown,
        }
    }

    /// Fire if ready, recording `now` as the new window start.
    ///
    /// Returns whether the action fired. A suppressed attempt leaves the
    /// window untouched.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        if self.ready(now) {
            self.last_fired = Some(now);
            true
        } else {
            false
        }
    }

    pub fn last_fired(&self) -> Option<Instant> {
        self.last_fired
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }
}

impl Default for CooldownGate {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_gate_is_ready() {
        let gate = CooldownGate::default();
        assert!(gate.ready(Instant::now()));
    }

    #[test]
    fn test_firing_closes_the_window() {
        let mut gate = CooldownGate::default();
        let t0 = Instant::now();

        assert!(gate.try_fire(t0));
        assert!(!gate.try_fire(t0 + Duration::from_millis(100)));
        assert_eq!(gate.last_fired(), Some(t0));
    }

    #[test]
    fn test_ready_again_after_cooldown_elapses() {
        let mut gate = CooldownGate::default();
        let t0 = Instant::now();

        assert!(gate.try_fire(t0));
        let later = t0 + Duration::from_millis(600);
        assert!(gate.ready(later));
        assert!(gate.try_fire(later));
        assert_eq!(gate.last_fired(), Some(later));
    }

    #[test]
    fn test_exact_boundary_stays_closed() {
        let mut gate = CooldownGate::new(Duration::from_millis(500));
        let t0 = Instant::now();

        assert!(gate.try_fire(t0));
        assert!(!gate.ready(t0 + Duration::from_millis(500)));
        assert!(gate.ready(t0 + Duration::from_millis(501)));
    }

    #[test]
    fn test_suppressed_attempt_does_not_extend_the_window() {
        let mut gate = CooldownGate::new(Duration::from_millis(500));
        let t0 = Instant::now();

        assert!(gate.try_fire(t0));
        // A blocked attempt near the end of the window must not reset it.
        assert!(!gate.try_fire(t0 + Duration::from_millis(499)));
        assert!(gate.try_fire(t0 + Duration::from_millis(501)));
    }
}
