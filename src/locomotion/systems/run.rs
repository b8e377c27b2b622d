//! Locomotion domain: horizontal motion model and facing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::components::{DashPhase, Facing, LocomotionState, Player};
use crate::locomotion::resources::{LocomotionInput, LocomotionTuning};

/// Continuous horizontal force for this tick, as velocity change per second
/// on the unit-mass body.
pub(crate) fn horizontal_force(
    state: &LocomotionState,
    intent_x: f32,
    velocity: Vec2,
    tuning: &LocomotionTuning,
) -> f32 {
    let lerp_amount = if state.dash_phase == DashPhase::End {
        tuning.dash_end_run_lerp
    } else {
        1.0
    };

    // Blend the target itself; with a factor of 1.0 this is just
    // intent * max speed.
    let mut target_speed = intent_x * tuning.run_max_speed;
    target_speed = velocity.x + (target_speed - velocity.x) * lerp_amount;

    let grounded = state.grounded_countdown > 0.0;
    let mut accel_rate = if grounded {
        if target_speed.abs() > 0.01 {
            tuning.run_accel_amount
        } else {
            tuning.run_deccel_amount
        }
    } else if target_speed.abs() > 0.01 {
        tuning.run_accel_amount * tuning.accel_in_air
    } else {
        tuning.run_deccel_amount * tuning.deccel_in_air
    };

    // Extra control near the jump apex.
    if (state.is_jumping || state.is_jump_falling)
        && velocity.y.abs() < tuning.jump_hang_time_threshold
    {
        accel_rate *= tuning.jump_hang_acceleration_mult;
        target_speed *= tuning.jump_hang_max_speed_mult;
    }

    // Conserve momentum: coast instead of braking when already moving
    // faster than the target in the same direction while airborne.
    if tuning.do_conserve_momentum
        && velocity.x.abs() > target_speed.abs()
        && velocity.x.signum() == target_speed.signum()
        && target_speed.abs() > 0.01
        && state.grounded_countdown < 0.0
    {
        accel_rate = 0.0;
    }

    (target_speed - velocity.x) * accel_rate
}

pub(crate) fn apply_run(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&LocomotionState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        // The attack phase owns velocity outright.
        if state.dash_phase == DashPhase::Attack {
            continue;
        }

        let force = horizontal_force(state, input.axis.x, velocity.0, &tuning);
        velocity.x += force * dt;
    }
}

pub(crate) fn update_facing(
    input: Res<LocomotionInput>,
    mut query: Query<&mut LocomotionState, With<Player>>,
) {
    for mut state in &mut query {
        // Zero intent never flips facing.
        if input.axis.x.abs() <= f32::EPSILON {
            continue;
        }

        let facing = if input.axis.x > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        };
        if state.facing != facing {
            state.facing = facing;
        }
    }
}
