// Smoothed analog axes driven by digital keys

use crate::core::math::clamp;

/// Response of a keyboard-driven axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSmoothing {
    /// Rate toward a held key's target (units/second)
    pub sensitivity: f32,
    /// Rate back to rest once released (units/second)
    pub gravity: f32,
    /// Jump to zero when the held direction reverses
    pub snap: bool,
}

impl Default for AxisSmoothing {
    fn default() -> Self {
        Self {
            sensitivity: 3.0,
            gravity: 3.0,
            snap: true,
        }
    }
}

/// One analog axis in [-1, 1]
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothedAxis {
    value: f32,
    smoothing: AxisSmoothing,
}

impl SmoothedAxis {
    pub fn new(smoothing: AxisSmoothing) -> Self {
        Self {
            value: 0.0,
            smoothing,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Move toward the digital `target` (-1, 0 or 1) for `dt` seconds
    pub fn update(&mut self, target: f32, dt: f32) -> f32 {
        let target = clamp(target, -1.0, 1.0);

        if self.smoothing.snap && target * self.value < 0.0 {
            self.value = 0.0;
        }

        let rate = if target == 0.0 {
            self.smoothing.gravity
        } else {
            self.smoothing.sensitivity
        };
        self.value = move_towards(self.value, target, rate * dt.max(0.0));
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ramps_up_at_sensitivity() {
        let mut axis = SmoothedAxis::default();
        assert_relative_eq!(axis.update(1.0, 0.1), 0.3, epsilon = 1e-6);
        assert_relative_eq!(axis.update(1.0, 0.1), 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_saturates_at_target() {
        let mut axis = SmoothedAxis::default();
        for _ in 0..20 {
            axis.update(-1.0, 0.1);
        }
        assert_eq!(axis.value(), -1.0);
    }

    #[test]
    fn test_returns_to_rest_at_gravity() {
        let mut axis = SmoothedAxis::default();
        axis.update(1.0, 1.0);
        assert_eq!(axis.value(), 1.0);

        assert_relative_eq!(axis.update(0.0, 0.2), 0.4, epsilon = 1e-6);
        assert_eq!(axis.update(0.0, 1.0), 0.0);
    }

    #[test]
    fn test_snaps_on_reversal() {
        let mut axis = SmoothedAxis::default();
        axis.update(1.0, 1.0);

        // Snap to zero first, then ramp toward the new side
        assert_relative_eq!(axis.update(-1.0, 0.1), -0.3, epsilon = 1e-6);
    }

    #[test]
    fn test_no_snap_glides_through_zero() {
        let mut axis = SmoothedAxis::new(AxisSmoothing {
            snap: false,
            ..Default::default()
        });
        axis.update(1.0, 1.0);
        assert_relative_eq!(axis.update(-1.0, 0.1), 0.7, epsilon = 1e-6);
    }
}
