//! Locomotion domain: jump state machine and the gravity policy.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::components::{LocomotionState, Player};
use crate::locomotion::resources::LocomotionTuning;

/// Resolve jump flag transitions, then fire a buffered jump if eligible.
pub(crate) fn resolve_jump(
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&mut LocomotionState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        // Rising turns into falling the moment vertical speed goes negative.
        if state.is_jumping && velocity.y < 0.0 {
            state.is_jumping = false;
            state.is_jump_falling = true;
        }

        // Landing clears the cut and falling flags.
        if state.grounded_countdown > 0.0 && !state.is_jumping {
            state.is_jump_cut = false;
            state.is_jump_falling = false;
        }

        // The dash owns the body; no jump can fire this tick.
        if state.is_dashing() {
            continue;
        }

        if state.can_jump() && state.jump_buffer_timer > 0.0 {
            state.jump_buffer_timer = 0.0;
            state.grounded_countdown = 0.0;
            state.is_jumping = true;
            state.is_jump_cut = false;
            state.is_jump_falling = false;

            // Cancel any downward speed first so the jump reaches the same
            // height whether it fires from rest or out of a fall.
            let mut impulse = tuning.jump_force;
            if velocity.y < 0.0 {
                impulse -= velocity.y;
            }
            velocity.y += impulse;
            debug!("Jump fired: impulse={}", impulse);
        }
    }
}

pub(crate) struct GravityResponse {
    pub scale: f32,
    pub fall_speed_cap: f32,
}

/// Pick the gravity-scale tier and fall-speed cap for the current tick.
///
/// A cap of infinity means the tier leaves fall speed alone.
#[allow(clippy::ifs_same_cond)]
pub(crate) fn gravity_response(
    state: &LocomotionState,
    vertical_speed: f32,
    tuning: &LocomotionTuning,
) -> GravityResponse {
    // The dash zeroes gravity for its whole duration, both phases, no
    // matter which way the body is moving.
    if state.is_dashing() {
        return GravityResponse {
            scale: 0.0,
            fall_speed_cap: f32::INFINITY,
        };
    }

    if vertical_speed < 0.0 {
        // Fast fall
        GravityResponse {
            scale: tuning.gravity_scale * tuning.fast_fall_gravity_mult,
            fall_speed_cap: tuning.max_fast_fall_speed,
        }
    } else if state.is_jump_cut {
        // Jump released early
        GravityResponse {
            scale: tuning.gravity_scale * tuning.jump_cut_gravity_mult,
            fall_speed_cap: tuning.max_fall_speed,
        }
    } else if (state.is_jumping || state.is_jump_falling)
        && vertical_speed.abs() < tuning.jump_hang_time_threshold
    {
        // Apex hang
        GravityResponse {
            scale: tuning.gravity_scale * tuning.jump_hang_gravity_mult,
            fall_speed_cap: f32::INFINITY,
        }
    } else if vertical_speed < 0.0 {
        // Plain fall tier; currently shadowed by the fast-fall tier above.
        GravityResponse {
            scale: tuning.gravity_scale * tuning.fall_gravity_mult,
            fall_speed_cap: tuning.max_fall_speed,
        }
    } else {
        // Grounded or rising normally
        GravityResponse {
            scale: tuning.gravity_scale,
            fall_speed_cap: f32::INFINITY,
        }
    }
}

pub(crate) fn apply_gravity(
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&LocomotionState, &mut LinearVelocity, &mut GravityScale), With<Player>>,
) {
    for (state, mut velocity, mut gravity) in &mut query {
        let response = gravity_response(state, velocity.y, &tuning);
        gravity.0 = response.scale;
        velocity.y = velocity.y.max(-response.fall_speed_cap);
    }
}
