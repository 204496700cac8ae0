//! Movement domain: the per-body motion controller and its tick.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::contact::sample_contacts;
use crate::movement::horizontal::apply_horizontal;
use crate::movement::vertical::{apply_vertical, resolve_air_state};
use crate::movement::{
    AirState, ContactSample, JumpProfile, MotionState, MovementConfig, MovementTuning, WalkState,
};

/// Axis values closer to zero than this count as "no input".
pub const AXIS_EPSILON: f32 = 1.0e-6;

/// The rigid body the controller drives. The controller reads the velocity
/// before a tick and writes the result back after it; nothing else is touched.
pub trait VelocityIntegrator {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
}

impl VelocityIntegrator for LinearVelocity {
    fn velocity(&self) -> Vec2 {
        self.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.0 = velocity;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingIntegrator,
    InvalidTimestep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Applied,
    Skipped(SkipReason),
}

/// Turns player intent and ground contacts into a target velocity, once per
/// fixed step.
///
/// Input arriving between ticks is buffered in a single slot and applied at
/// the start of the next [`tick`](Self::tick), so a tick never sees a partial
/// update. Contacts are folded in immediately through
/// [`on_contact`](Self::on_contact).
#[derive(Component, Debug, Clone)]
pub struct MotionController {
    state: MotionState,
    tuning: MovementTuning,
    jump: JumpProfile,
    pending_move: Option<Vec2>,
    last_ground_contact: Option<ContactSample>,
    reported_skip: Option<SkipReason>,
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new(MovementTuning::default(), JumpProfile::default())
    }
}

impl MotionController {
    pub fn new(tuning: MovementTuning, jump: JumpProfile) -> Self {
        Self {
            state: MotionState::default(),
            tuning,
            jump,
            pending_move: None,
            last_ground_contact: None,
            reported_skip: None,
        }
    }

    pub fn from_config(config: &MovementConfig) -> Self {
        Self::new(config.tuning.clone(), config.jump.clone())
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn jump_profile(&self) -> &JumpProfile {
        &self.jump
    }

    pub fn air_state(&self) -> AirState {
        self.state.air_state
    }

    pub fn walk_state(&self) -> WalkState {
        self.state.walk_state
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    /// Last contact the sampler accepted as ground. Kept for diagnostics;
    /// the controller itself never reads it.
    pub fn last_ground_contact(&self) -> Option<ContactSample> {
        self.last_ground_contact
    }

    /// Swap in new configuration without touching the motion state.
    pub fn set_config(&mut self, config: &MovementConfig) {
        self.tuning = config.tuning.clone();
        self.jump = config.jump.clone();
    }

    /// Buffer an axis change for the next tick. The latest axis wins.
    pub fn queue_move(&mut self, axis: Vec2) {
        self.pending_move = Some(axis);
    }

    /// Buffer a jump press for the next tick.
    pub fn queue_jump(&mut self) {
        self.state.jump_requested = true;
    }

    /// Start a jump if standing on ground. No buffering, no air jumps.
    pub fn on_jump_pressed(&mut self) {
        if self.state.air_state != AirState::Grounded {
            return;
        }

        self.state.air_state = AirState::Jumping;
        self.state.grounded_this_tick = false;
        self.state.jump_elapsed = 0.0;
        debug!("Jump started: duration={}", self.jump.duration());
    }

    pub fn on_move_changed(&mut self, axis: Vec2) {
        self.state.move_axis = axis.x.clamp(-1.0, 1.0);
        self.state.walk_state = if axis.x.abs() < AXIS_EPSILON {
            WalkState::Idle
        } else {
            WalkState::Walking
        };
    }

    /// Feed contacts from one collision event. Returns whether the body is
    /// now considered grounded for the coming tick.
    pub fn on_contact(&mut self, contacts: impl IntoIterator<Item = ContactSample>) -> bool {
        if let Some(contact) = sample_contacts(&mut self.state, &self.tuning, contacts) {
            self.last_ground_contact = Some(contact);
        }
        self.state.grounded_this_tick
    }

    /// Advance one fixed step of length `dt`.
    pub fn tick<I>(&mut self, integrator: Option<&mut I>, dt: f32) -> TickOutcome
    where
        I: VelocityIntegrator + ?Sized,
    {
        let Some(integrator) = integrator else {
            return self.skip(SkipReason::MissingIntegrator);
        };
        if !dt.is_finite() || dt <= 0.0 {
            return self.skip(SkipReason::InvalidTimestep);
        }
        self.reported_skip = None;

        self.drain_pending_input();

        self.state.velocity = integrator.velocity();

        let previous = self.state.air_state;
        self.state.air_state = resolve_air_state(&self.state, &self.jump);
        apply_vertical(&mut self.state, &self.tuning, &self.jump, dt);
        log_air_transition(previous, self.state.air_state);

        apply_horizontal(&mut self.state, &self.tuning, dt);

        integrator.set_velocity(self.state.velocity);

        self.state.grounded_this_tick = false;
        TickOutcome::Applied
    }

    /// Return to the initial state, as after construction. Configuration is kept.
    pub fn reset(&mut self) {
        self.state = MotionState::default();
        self.pending_move = None;
        self.last_ground_contact = None;
        self.reported_skip = None;
    }

    fn drain_pending_input(&mut self) {
        if let Some(axis) = self.pending_move.take() {
            self.on_move_changed(axis);
        }
        if std::mem::take(&mut self.state.jump_requested) {
            self.on_jump_pressed();
        }
    }

    fn skip(&mut self, reason: SkipReason) -> TickOutcome {
        if self.reported_skip != Some(reason) {
            match reason {
                SkipReason::MissingIntegrator => {
                    warn!("Motion tick skipped: body has no velocity to drive")
                }
                SkipReason::InvalidTimestep => {
                    warn!("Motion tick skipped: timestep must be positive and finite")
                }
            }
            self.reported_skip = Some(reason);
        }
        TickOutcome::Skipped(reason)
    }
}

fn log_air_transition(previous: AirState, current: AirState) {
    if previous == current {
        return;
    }
    match (previous, current) {
        (_, AirState::Grounded) => debug!("Landed: was {:?}", previous),
        (AirState::Jumping, AirState::FreeFall) => debug!("Jump ended: falling"),
        (AirState::Grounded, AirState::FreeFall) => debug!("Left ground: falling"),
        _ => debug!("Air state: {:?} -> {:?}", previous, current),
    }
}
