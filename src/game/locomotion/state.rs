// Grounded/airborne state machine

/// Whether the actor's vertical motion is resolved against a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroundState {
    /// Supported by a surface; gravity is not integrated
    Grounded,
    /// Unsupported; gravity accumulates into vertical velocity
    #[default]
    Airborne,
}

impl GroundState {
    pub fn from_grounded(grounded: bool) -> Self {
        if grounded {
            Self::Grounded
        } else {
            Self::Airborne
        }
    }

    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Grounded)
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Airborne)
    }
}

/// State change observed during one sensor update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    /// Airborne → Grounded
    Landed,
    /// Grounded → Airborne (jumped or walked off a ledge)
    LeftGround,
}

/// Tracks the ground state across frames
#[derive(Debug, Default)]
pub struct GroundStateMachine {
    current: GroundState,
}

impl GroundStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state
    pub fn state(&self) -> GroundState {
        self.current
    }

    /// Apply this frame's sensor reading
    pub fn update(&mut self, grounded: bool) -> Option<GroundTransition> {
        let next = GroundState::from_grounded(grounded);
        if next == self.current {
            return None;
        }

        self.current = next;
        Some(match next {
            GroundState::Grounded => GroundTransition::Landed,
            GroundState::Airborne => GroundTransition::LeftGround,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_airborne() {
        let sm = GroundStateMachine::new();
        assert_eq!(sm.state(), GroundState::Airborne);
        assert!(sm.state().is_airborne());
    }

    #[test]
    fn test_landing_transition() {
        let mut sm = GroundStateMachine::new();
        assert_eq!(sm.update(true), Some(GroundTransition::Landed));
        assert!(sm.state().is_grounded());
    }

    #[test]
    fn test_leaving_ground() {
        let mut sm = GroundStateMachine::new();
        sm.update(true);
        assert_eq!(sm.update(false), Some(GroundTransition::LeftGround));
        assert!(sm.state().is_airborne());
    }

    #[test]
    fn test_steady_state_reports_no_transition() {
        let mut sm = GroundStateMachine::new();
        assert_eq!(sm.update(false), None);
        sm.update(true);
        assert_eq!(sm.update(true), None);
        assert_eq!(sm.update(true), None);
        assert!(sm.state().is_grounded());
    }
}
