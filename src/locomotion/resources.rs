//! Locomotion domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Downward gravity strength the world runs at, in units/s^2. The effective
/// pull on the player is this times the tuning `gravity_scale` and whatever
/// multiplier the gravity policy picks for the current tick.
pub const BASE_GRAVITY_STRENGTH: f32 = 1000.0;

/// Flat record of every locomotion constant, loaded once at startup and
/// immutable afterwards. Field names follow the config file.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionTuning {
    // Run
    pub run_max_speed: f32,
    pub run_accel_amount: f32,
    pub run_deccel_amount: f32,
    /// Fraction of the ground acceleration rate available while airborne.
    pub accel_in_air: f32,
    pub deccel_in_air: f32,
    pub do_conserve_momentum: bool,

    // Gravity
    pub gravity_scale: f32,
    pub fall_gravity_mult: f32,
    pub max_fall_speed: f32,
    pub fast_fall_gravity_mult: f32,
    pub max_fast_fall_speed: f32,

    // Jump
    pub jump_force: f32,
    pub jump_cut_gravity_mult: f32,
    pub jump_hang_gravity_mult: f32,
    /// Vertical speed below which the jump counts as "at the apex".
    pub jump_hang_time_threshold: f32,
    pub jump_hang_acceleration_mult: f32,
    pub jump_hang_max_speed_mult: f32,
    pub coyote_time: f32,
    pub jump_input_buffer_time: f32,

    // Dash
    pub dash_amount: u8,
    pub dash_speed: f32,
    pub dash_end_speed: f32,
    pub dash_attack_time: f32,
    pub dash_end_time: f32,
    /// Real-time length of the freeze frame played when a dash triggers.
    pub dash_sleep_time: f32,
    /// Grounded time before a spent charge comes back.
    pub dash_refill_time: f32,
    /// Blend factor toward move intent during the dash end phase; 1.0 would
    /// hand control back instantly.
    pub dash_end_run_lerp: f32,
    pub dash_input_buffer_time: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            run_max_speed: 320.0,
            run_accel_amount: 11.5,
            run_deccel_amount: 23.0,
            accel_in_air: 0.65,
            deccel_in_air: 0.65,
            do_conserve_momentum: true,

            gravity_scale: 2.3,
            fall_gravity_mult: 1.5,
            max_fall_speed: 700.0,
            fast_fall_gravity_mult: 2.0,
            max_fast_fall_speed: 900.0,

            jump_force: 690.0,
            jump_cut_gravity_mult: 2.0,
            jump_hang_gravity_mult: 0.5,
            jump_hang_time_threshold: 60.0,
            jump_hang_acceleration_mult: 1.1,
            jump_hang_max_speed_mult: 1.3,
            coyote_time: 0.1,
            jump_input_buffer_time: 0.1,

            dash_amount: 2,
            dash_speed: 640.0,
            dash_end_speed: 480.0,
            dash_attack_time: 0.15,
            dash_end_time: 0.15,
            dash_sleep_time: 0.05,
            dash_refill_time: 0.1,
            dash_end_run_lerp: 0.5,
            dash_input_buffer_time: 0.1,
        }
    }
}

impl LocomotionTuning {
    /// Peak height of a full, uncut jump in world units.
    pub fn jump_apex_height(&self) -> f32 {
        let gravity = self.gravity_scale * BASE_GRAVITY_STRENGTH;
        self.jump_force * self.jump_force / (2.0 * gravity)
    }

    /// Seconds from the jump impulse to the apex of a full jump.
    pub fn jump_apex_time(&self) -> f32 {
        self.jump_force / (self.gravity_scale * BASE_GRAVITY_STRENGTH)
    }
}

/// Per-frame snapshot of player intent, written by input sampling and read
/// by everything else.
#[derive(Resource, Debug, Default)]
pub struct LocomotionInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
}
