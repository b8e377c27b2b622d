//! Locomotion domain: components and physics layers for the player body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::resources::LocomotionTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, walls)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Collider footprint of the player body, shared by spawn code and the
/// ground probe offset.
pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn unit(self) -> Vec2 {
        Vec2::new(self.sign(), 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashPhase {
    #[default]
    Inactive,
    /// Fixed-velocity burst along the dash direction.
    Attack,
    /// Decaying hand-back to player control.
    End,
}

/// Aggregate locomotion state for one controlled body.
///
/// Each field has exactly one writing system; everything else reads. Timers
/// count down in seconds of scaled game time, and `grounded_countdown` keeps
/// falling below zero after the grace window so systems can tell "just left
/// the ground" from "airborne for a while".
#[derive(Component, Debug, Default)]
pub struct LocomotionState {
    pub grounded_countdown: f32,
    pub facing: Facing,

    pub is_jumping: bool,
    pub is_jump_cut: bool,
    pub is_jump_falling: bool,
    pub jump_buffer_timer: f32,

    pub dash_charges: u8,
    pub dash_refilling: bool,
    pub dash_refill_timer: f32,
    pub dash_buffer_timer: f32,
    pub dash_direction: Vec2,
    pub dash_phase: DashPhase,
    pub dash_phase_elapsed: f32,
    pub dash_end_velocity_set: bool,
}

impl LocomotionState {
    pub fn is_dashing(&self) -> bool {
        self.dash_phase != DashPhase::Inactive
    }

    /// Grounded (or inside the coyote window) and not already airborne from
    /// a jump.
    pub fn can_jump(&self) -> bool {
        self.grounded_countdown > 0.0 && !self.is_jumping
    }

    pub fn can_dash(&self) -> bool {
        self.dash_charges > 0
    }

    pub fn press_jump(&mut self, tuning: &LocomotionTuning) {
        self.jump_buffer_timer = tuning.jump_input_buffer_time;
    }

    /// An early release only cuts a jump that is still rising; releasing
    /// during a fall does nothing.
    pub fn release_jump(&mut self, vertical_speed: f32) {
        if self.is_jumping && vertical_speed > 0.0 {
            self.is_jump_cut = true;
        }
    }

    /// Latches the press and locks in the direction; the dash travels along
    /// the facing held at press time, not at trigger time.
    pub fn press_dash(&mut self, tuning: &LocomotionTuning) {
        self.dash_buffer_timer = tuning.dash_input_buffer_time;
        self.dash_direction = self.facing.unit();
    }

    /// Restart the grace window on ground contact. Suppressed while jumping
    /// or dashing so a fresh jump does not instantly re-ground itself.
    pub fn refresh_ground_contact(&mut self, overlapping: bool, coyote_time: f32) {
        if overlapping && !self.is_jumping && !self.is_dashing() {
            self.grounded_countdown = coyote_time;
        }
    }
}
