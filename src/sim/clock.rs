//! Frame timing
//!
//! Turns wall-clock timestamps into simulation deltas. Time that passes while
//! the simulation isn't running (menus, pause) is thrown away, so resuming
//! never produces a catch-up jump.

use crate::consts::MAX_FRAME_DT;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta for the frame at `now` (seconds). Returns 0 when `running` is
    /// false, and never more than `MAX_FRAME_DT`.
    pub fn delta(&mut self, now: f64, running: bool) -> f32 {
        let last = self.last.replace(now);
        if !running {
            return 0.0;
        }
        match last {
            Some(prev) if now > prev => ((now - prev) as f32).min(MAX_FRAME_DT),
            _ => 0.0,
        }
    }

    /// Forget the previous timestamp
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(5.0, true), 0.0);
        assert!((clock.delta(5.016, true) - 0.016).abs() < 1e-5);
    }

    #[test]
    fn test_paused_time_is_discarded() {
        let mut clock = FrameClock::new();
        clock.delta(0.0, true);
        assert_eq!(clock.delta(1.0, false), 0.0);
        assert_eq!(clock.delta(30.0, false), 0.0);
        // Resume: only the time since the last paused frame counts
        assert!((clock.delta(30.01, true) - 0.01).abs() < 1e-4);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = FrameClock::new();
        clock.delta(0.0, true);
        assert_eq!(clock.delta(3.0, true), MAX_FRAME_DT);
    }

    #[test]
    fn test_time_going_backwards() {
        let mut clock = FrameClock::new();
        clock.delta(10.0, true);
        assert_eq!(clock.delta(9.0, true), 0.0);
        clock.reset();
        assert_eq!(clock.delta(20.0, true), 0.0);
    }
}
