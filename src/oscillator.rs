use raylib::prelude::*;
use crate::animation::{Advance, Animation};
use crate::constants::*;
use crate::state::SwayDirection;

/// Parachute sway: ping-pongs between -45 and +45 degrees forever.
pub struct RotationOscillator {
    angle: f32,
    elapsed: f32, // Time into the current period, kept in [0, 2 * SWAY_DURATION)
    cancelled: bool,
}

impl RotationOscillator {
    pub fn new() -> Self {
        Self {
            angle: -SWAY_ANGLE,
            elapsed: 0.0,
            cancelled: false,
        }
    }

    /// Angle after `elapsed` seconds of uninterrupted swaying.
    pub fn angle_at(elapsed: f32) -> f32 {
        let t = elapsed.rem_euclid(2.0 * SWAY_DURATION);
        let angle = if t < SWAY_DURATION {
            ease::linear_none(t, -SWAY_ANGLE, 2.0 * SWAY_ANGLE, SWAY_DURATION)
        } else {
            ease::linear_none(t - SWAY_DURATION, SWAY_ANGLE, -2.0 * SWAY_ANGLE, SWAY_DURATION)
        };
        angle.clamp(-SWAY_ANGLE, SWAY_ANGLE)
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn direction(&self) -> SwayDirection {
        if self.elapsed < SWAY_DURATION {
            SwayDirection::Forward
        } else {
            SwayDirection::Reverse
        }
    }
}

impl Default for RotationOscillator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for RotationOscillator {
    fn update(&mut self, dt: f32) -> Advance {
        if self.cancelled {
            return Advance::Cancelled;
        }

        // Completed whenever at least one turning point falls inside this step
        let legs_before = (self.elapsed / SWAY_DURATION).floor();
        let legs_after = ((self.elapsed + dt) / SWAY_DURATION).floor();
        self.elapsed = (self.elapsed + dt).rem_euclid(2.0 * SWAY_DURATION);
        self.angle = Self::angle_at(self.elapsed);

        if legs_after > legs_before {
            Advance::Completed
        } else {
            Advance::Running
        }
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_negative_extreme() {
        let osc = RotationOscillator::new();
        assert_eq!(osc.angle(), -45.0);
        assert_eq!(osc.direction(), SwayDirection::Forward);
    }

    #[test]
    fn test_one_period_is_four_seconds() {
        assert_eq!(RotationOscillator::angle_at(0.0), -45.0);
        assert_eq!(RotationOscillator::angle_at(1.0), 0.0);
        assert_eq!(RotationOscillator::angle_at(2.0), 45.0);
        assert_eq!(RotationOscillator::angle_at(3.0), 0.0);
        assert_eq!(RotationOscillator::angle_at(4.0), -45.0);
    }

    #[test]
    fn test_update_reaches_extremes() {
        let mut osc = RotationOscillator::new();
        for _ in 0..4 {
            osc.update(0.5);
        }
        assert_eq!(osc.angle(), 45.0);
        assert_eq!(osc.direction(), SwayDirection::Reverse);
        for _ in 0..4 {
            osc.update(0.5);
        }
        assert_eq!(osc.angle(), -45.0);
        assert_eq!(osc.direction(), SwayDirection::Forward);
    }

    #[test]
    fn test_angle_stays_in_bounds() {
        let mut osc = RotationOscillator::new();
        for _ in 0..10_000 {
            osc.update(1.0 / 60.0);
            assert!(osc.angle() >= -45.0 && osc.angle() <= 45.0, "angle {}", osc.angle());
        }
    }

    #[test]
    fn test_turning_points_alternate() {
        let mut osc = RotationOscillator::new();
        let mut turning_points = Vec::new();
        for _ in 0..40 {
            // 0.25s steps land exactly on each 2s boundary
            if osc.update(0.25) == Advance::Completed {
                turning_points.push(osc.angle());
            }
        }
        assert_eq!(turning_points.len(), 5);
        assert_eq!(turning_points[0], 45.0);
        for pair in turning_points.windows(2) {
            assert_eq!(pair[0], -pair[1]);
        }
    }

    #[test]
    fn test_full_period_step_reports_turn() {
        let mut osc = RotationOscillator::new();
        // Crosses both +45 and -45 in one frame
        assert_eq!(osc.update(4.0), Advance::Completed);
        assert_eq!(osc.angle(), -45.0);
        assert_eq!(osc.update(0.5), Advance::Running);
    }

    #[test]
    fn test_angle_at_stays_in_bounds() {
        for i in 0..4000 {
            let angle = RotationOscillator::angle_at(i as f32 * 0.0173);
            assert!(angle >= -45.0 && angle <= 45.0, "angle {}", angle);
        }
    }

    #[test]
    fn test_cancel_freezes_angle() {
        let mut osc = RotationOscillator::new();
        osc.update(0.5);
        let frozen = osc.angle();
        osc.cancel();
        assert!(osc.is_cancelled());
        assert_eq!(osc.update(1.0), Advance::Cancelled);
        assert_eq!(osc.angle(), frozen);
    }
}
