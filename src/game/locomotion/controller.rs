// Per-frame locomotion update for a single actor

use glam::Vec3;
use log::{debug, error, trace};

use super::animation::{self, AnimationFrame, AnimationSink, AnimatorParameters};
use super::body::{CharacterBody, MoveContact};
use super::config::{ConfigError, LocomotionConfig, GROUNDED_VERTICAL_VELOCITY};
use super::direction::{movement_direction, select_speed, CameraBasis, LocomotionInput};
use super::orientation::turn_toward;
use super::sensor::{ground_distance, sense_ground};
use super::state::{GroundState, GroundStateMachine, GroundTransition};

/// What happened during one variable-rate update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Ground sensor verdict at the start of the frame
    pub grounded: bool,
    /// Ground state change observed this frame, if any
    pub transition: Option<GroundTransition>,
    /// World-space movement direction (unit or zero)
    pub direction: Vec3,
    /// Selected ground speed
    pub speed: f32,
    /// The jump edge was accepted
    pub jumped: bool,
    /// Vertical velocity was reset to the grounded value
    pub settled: bool,
}

/// Kinematic locomotion for one actor.
///
/// The host calls `advance_variable_step` once per rendered frame and
/// `advance_fixed_step` once per physics tick; these are the only operations
/// that change controller state. Horizontal motion is recomputed every frame
/// from input, only the vertical component of `velocity` persists.
#[derive(Debug)]
pub struct LocomotionController<A: AnimationSink = AnimatorParameters> {
    config: LocomotionConfig,
    camera: Option<CameraBasis>,
    animator: Option<A>,
    velocity: Vec3,
    ground: GroundStateMachine,
    /// Contact flag reported by the most recent move
    contact: bool,
}

impl<A: AnimationSink> LocomotionController<A> {
    /// Build a controller. Fails only on invalid tuning; a missing animator
    /// is reported here once and the controller then skips parameter writes.
    pub fn new(
        config: LocomotionConfig,
        camera: Option<CameraBasis>,
        animator: Option<A>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if animator.is_none() {
            error!("Animator is missing, animation parameters will not be written");
        }

        Ok(Self {
            config,
            camera,
            animator,
            velocity: Vec3::ZERO,
            ground: GroundStateMachine::new(),
            contact: false,
        })
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn ground_state(&self) -> GroundState {
        self.ground.state()
    }

    pub fn is_grounded(&self) -> bool {
        self.ground.state().is_grounded()
    }

    pub fn camera(&self) -> Option<&CameraBasis> {
        self.camera.as_ref()
    }

    /// Bind, replace or unbind the camera the input is relative to
    pub fn set_camera(&mut self, camera: Option<CameraBasis>) {
        self.camera = camera;
    }

    pub fn animator(&self) -> Option<&A> {
        self.animator.as_ref()
    }

    /// Variable-rate update: sense ground, move horizontally, turn, jump, animate
    pub fn advance_variable_step<B: CharacterBody + ?Sized>(
        &mut self,
        dt: f32,
        input: &LocomotionInput,
        body: &mut B,
    ) -> FrameReport {
        let reading = sense_ground(&*body, body.position(), self.contact);
        let transition = self.ground.update(reading.grounded);
        match transition {
            Some(GroundTransition::Landed) => debug!("Landed (vy = {:.2})", self.velocity.y),
            Some(GroundTransition::LeftGround) => debug!("Left ground (vy = {:.2})", self.velocity.y),
            None => {}
        }

        let settled = reading.grounded && self.velocity.y < 0.0;
        if settled {
            self.land();
        }

        let direction = movement_direction(input.horizontal, input.vertical, self.camera.as_ref());
        let speed = select_speed(direction, input.sprint, &self.config);

        let contact = body.move_by(direction * speed * dt);
        self.contact = contact.grounded;

        if direction != Vec3::ZERO {
            let rotation = turn_toward(body.rotation(), direction, self.config.rotation_speed, dt);
            body.set_rotation(rotation);
        }

        let jumped = input.jump_pressed && self.try_jump();

        if let Some(animator) = self.animator.as_mut() {
            let frame = AnimationFrame {
                speed,
                sprint_speed: self.config.sprint_speed,
                vertical_velocity: self.velocity.y,
                airborne: !reading.grounded,
                probe_distance: ground_distance(&*body, body.position()),
            };
            animation::drive(animator, &frame);
        }

        trace!(
            "variable step dt={dt:.4} grounded={} speed={speed:.2} vy={:.2} probe={:.2}",
            reading.grounded,
            self.velocity.y,
            reading.probe_distance
        );

        FrameReport {
            grounded: reading.grounded,
            transition,
            direction,
            speed,
            jumped,
            settled,
        }
    }

    /// Fixed-rate update: integrate gravity while airborne, then apply velocity
    pub fn advance_fixed_step<B: CharacterBody + ?Sized>(
        &mut self,
        fixed_dt: f32,
        body: &mut B,
    ) -> MoveContact {
        if self.ground.state().is_airborne() {
            self.velocity.y += self.config.gravity * fixed_dt;
        }

        let contact = body.move_by(self.velocity * fixed_dt);
        self.contact = contact.grounded;
        contact
    }

    /// The landing reset: press into the ground and clear airborne animation flags
    fn land(&mut self) {
        self.velocity.y = GROUNDED_VERTICAL_VELOCITY;
        if let Some(animator) = self.animator.as_mut() {
            animation::signal_landing(animator);
        }
    }

    /// Start a jump if grounded; no-op otherwise
    fn try_jump(&mut self) -> bool {
        if !self.ground.state().is_grounded() {
            return false;
        }

        self.velocity.y = self.config.jump_velocity();
        if let Some(animator) = self.animator.as_mut() {
            animation::signal_jump(animator);
        }
        debug!("Jump (vy = {:.2})", self.velocity.y);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::animation::{PARAM_IS_FALLING, PARAM_IS_JUMPING, PARAM_SPEED, PARAM_VERTICAL_SPEED};
    use super::super::test_support::FlatGround;
    use super::*;
    use crate::core::math::{angle_delta, heading};
    use approx::assert_relative_eq;
    use glam::Quat;
    use std::f32::consts::PI;

    const FRAME: f32 = 1.0 / 60.0;
    const TICK: f32 = 0.02;

    fn controller() -> LocomotionController {
        LocomotionController::new(LocomotionConfig::default(), None, Some(AnimatorParameters::new()))
            .expect("default config is valid")
    }

    fn params(controller: &LocomotionController) -> &AnimatorParameters {
        controller.animator().expect("animator bound")
    }

    /// Drop the actor from just above the floor until it settles on it
    fn settle(controller: &mut LocomotionController) -> FlatGround {
        let mut body = FlatGround::at_height(0.3);
        for _ in 0..200 {
            let report = controller.advance_variable_step(FRAME, &LocomotionInput::default(), &mut body);
            if report.settled {
                return body;
            }
            controller.advance_fixed_step(TICK, &mut body);
        }
        panic!("actor never settled");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = LocomotionConfig::default().with_gravity(0.0);
        let result = LocomotionController::<AnimatorParameters>::new(config, None, None);
        assert!(matches!(result, Err(ConfigError::Gravity(_))));
    }

    #[test]
    fn test_zero_input_does_not_move_horizontally() {
        let mut controller = controller();
        let mut body = FlatGround::at_height(0.0);

        let report = controller.advance_variable_step(FRAME, &LocomotionInput::default(), &mut body);

        assert_eq!(report.direction, Vec3::ZERO);
        assert_eq!(report.speed, 0.0);
        assert_eq!(body.moves, vec![Vec3::ZERO]);
        assert_eq!(body.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_walk_displacement_is_variable_step() {
        let mut controller = controller();
        let mut body = FlatGround::at_height(0.0);

        let input = LocomotionInput::new(0.0, 1.0);
        controller.advance_variable_step(0.1, &input, &mut body);

        assert_relative_eq!(body.position.z, 0.5, epsilon = 1e-5);
        assert_eq!(body.position.x, 0.0);
    }

    #[test]
    fn test_sprint_uses_full_speed_for_analog_input() {
        let mut controller = controller();
        let mut body = FlatGround::at_height(0.0);

        let input = LocomotionInput::new(0.1, 0.0).sprinting();
        let report = controller.advance_variable_step(0.1, &input, &mut body);

        assert_eq!(report.speed, 10.0);
        assert_relative_eq!(body.position.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(params(&controller).float(PARAM_SPEED).unwrap(), 1.0);
    }

    #[test]
    fn test_camera_relative_movement() {
        let mut controller = controller();
        controller.set_camera(Some(CameraBasis::from_yaw_pitch(PI / 2.0, 0.5)));
        let mut body = FlatGround::at_height(0.0);

        let report = controller.advance_variable_step(0.1, &LocomotionInput::new(0.0, 1.0), &mut body);

        assert_relative_eq!(report.direction.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(body.position.x, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_jump_when_grounded() {
        let mut controller = controller();
        let mut body = settle(&mut controller);

        let report =
            controller.advance_variable_step(FRAME, &LocomotionInput::default().jumping(), &mut body);

        assert!(report.jumped);
        assert_relative_eq!(controller.velocity().y, (2.0f32 * 9.81).sqrt(), epsilon = 1e-5);
        assert!(params(&controller).bool(PARAM_IS_JUMPING));
    }

    #[test]
    fn test_jump_while_airborne_is_noop() {
        let mut controller = controller();
        let mut body = FlatGround::at_height(1.0);

        controller.advance_variable_step(FRAME, &LocomotionInput::default(), &mut body);
        controller.advance_fixed_step(TICK, &mut body);
        let before = controller.velocity().y;

        let report =
            controller.advance_variable_step(FRAME, &LocomotionInput::default().jumping(), &mut body);

        assert!(!report.jumped);
        assert_eq!(controller.velocity().y, before);
        assert!(!params(&controller).bool(PARAM_IS_JUMPING));
    }

    #[test]
    fn test_gravity_only_while_airborne() {
        let mut controller = controller();
        let mut body = FlatGround::bottomless(Vec3::new(0.0, 10.0, 0.0));

        controller.advance_variable_step(FRAME, &LocomotionInput::default(), &mut body);
        controller.advance_fixed_step(TICK, &mut body);
        assert_relative_eq!(controller.velocity().y, -9.81 * TICK, epsilon = 1e-6);
        assert_relative_eq!(body.position.y, 10.0 - 9.81 * TICK * TICK, epsilon = 1e-5);

        let mut grounded = LocomotionController::<AnimatorParameters>::new(
            LocomotionConfig::default(),
            None,
            None,
        )
        .unwrap();
        let mut floor = FlatGround::at_height(0.0);
        grounded.advance_variable_step(FRAME, &LocomotionInput::default(), &mut floor);
        grounded.advance_fixed_step(TICK, &mut floor);
        assert_eq!(grounded.velocity().y, 0.0);
    }

    #[test]
    fn test_landing_resets_velocity_and_flags() {
        let mut controller = controller();
        let mut body = FlatGround::at_height(1.0);

        let mut was_falling = false;
        let mut landed = false;
        for _ in 0..200 {
            let report = controller.advance_variable_step(FRAME, &LocomotionInput::default(), &mut body);
            if report.grounded {
                landed = true;
                break;
            }
            was_falling |= params(&controller).bool(PARAM_IS_FALLING);
            controller.advance_fixed_step(TICK, &mut body);
        }

        assert!(landed);
        assert!(was_falling);
        assert_eq!(controller.velocity().y, -2.0);
        assert!(!params(&controller).bool(PARAM_IS_FALLING));
        assert!(!params(&controller).bool(PARAM_IS_JUMPING));
        assert_eq!(params(&controller).float(PARAM_VERTICAL_SPEED), Some(-2.0));
    }

    #[test]
    fn test_jump_arc_lands_with_cleared_flags() {
        let mut controller = controller();
        let mut body = settle(&mut controller);

        controller.advance_fixed_step(TICK, &mut body);
        controller.advance_variable_step(FRAME, &LocomotionInput::default().jumping(), &mut body);
        assert!(params(&controller).bool(PARAM_IS_JUMPING));

        let mut left_ground = false;
        for _ in 0..400 {
            controller.advance_fixed_step(TICK, &mut body);
            let report = controller.advance_variable_step(FRAME, &LocomotionInput::default(), &mut body);
            match report.transition {
                Some(GroundTransition::LeftGround) => left_ground = true,
                Some(GroundTransition::Landed) => break,
                None => {}
            }
        }

        assert!(left_ground);
        assert!(controller.is_grounded());
        assert_eq!(controller.velocity().y, -2.0);
        assert!(!params(&controller).bool(PARAM_IS_JUMPING));
    }

    #[test]
    fn test_falling_flag_far_above_ground() {
        let mut controller = controller();
        let mut body = FlatGround::at_height(1.5);

        for _ in 0..6 {
            controller.advance_variable_step(FRAME, &LocomotionInput::default(), &mut body);
            controller.advance_fixed_step(TICK, &mut body);
        }
        controller.advance_variable_step(FRAME, &LocomotionInput::default(), &mut body);

        assert!(controller.velocity().y < -1.0);
        assert!(body.height() > 0.5);
        assert!(params(&controller).bool(PARAM_IS_FALLING));
    }

    #[test]
    fn test_no_falling_flag_close_to_ground() {
        let mut controller = controller();
        let mut body = FlatGround::at_height(0.4);

        for _ in 0..6 {
            controller.advance_variable_step(FRAME, &LocomotionInput::default(), &mut body);
            controller.advance_fixed_step(TICK, &mut body);
        }
        let report = controller.advance_variable_step(FRAME, &LocomotionInput::default(), &mut body);

        assert!(!report.grounded);
        assert!(controller.velocity().y < -1.0);
        assert!(body.height() < 0.5);
        assert!(!params(&controller).bool(PARAM_IS_FALLING));
    }

    #[test]
    fn test_reversal_turn_is_partial() {
        let mut controller = controller();
        let mut body = FlatGround::at_height(0.0);

        controller.advance_variable_step(FRAME, &LocomotionInput::new(0.0, -1.0), &mut body);

        let turned = angle_delta(heading(Quat::IDENTITY), heading(body.rotation));
        assert!(turned > 0.0);
        assert!(turned < PI);
    }

    #[test]
    fn test_walking_off_ledge_leaves_ground() {
        let mut controller = controller();
        let mut body = settle(&mut controller);

        body.floor = None;
        let mut left_ground = None;
        for _ in 0..3 {
            controller.advance_fixed_step(TICK, &mut body);
            let report = controller.advance_variable_step(FRAME, &LocomotionInput::default(), &mut body);
            if report.transition.is_some() {
                left_ground = report.transition;
                break;
            }
        }
        assert_eq!(left_ground, Some(GroundTransition::LeftGround));
        assert!(!controller.is_grounded());

        controller.advance_fixed_step(TICK, &mut body);
        assert!(controller.velocity().y < -2.0);
    }

    #[test]
    fn test_missing_animator_still_moves() {
        let mut controller =
            LocomotionController::<AnimatorParameters>::new(LocomotionConfig::default(), None, None)
                .unwrap();
        let mut body = settle(&mut controller);

        let report =
            controller.advance_variable_step(0.1, &LocomotionInput::new(1.0, 0.0).jumping(), &mut body);

        assert!(report.jumped);
        assert!(controller.animator().is_none());
        assert_relative_eq!(body.position.x, 0.5, epsilon = 1e-5);
    }
}
