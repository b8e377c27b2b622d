//! Locomotion domain: dash charges, refill, and the two-phase dash profile.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::FreezeFrame;
use crate::locomotion::components::{DashPhase, LocomotionState, Player};
use crate::locomotion::resources::LocomotionTuning;

/// Schedule and grant charge refills.
///
/// A refill is only scheduled while grounded with no dash running and no
/// other refill in flight; once scheduled it pays out after
/// `dash_refill_time` of scaled time whatever the body is doing by then.
pub(crate) fn refill_dash(
    tuning: Res<LocomotionTuning>,
    mut query: Query<&mut LocomotionState, With<Player>>,
) {
    for mut state in &mut query {
        if !state.dash_refilling
            && !state.is_dashing()
            && state.dash_charges < tuning.dash_amount
            && state.grounded_countdown > 0.0
        {
            state.dash_refilling = true;
            state.dash_refill_timer = tuning.dash_refill_time;
        }

        if state.dash_refilling && state.dash_refill_timer <= 0.0 {
            state.dash_refilling = false;
            state.dash_charges = (state.dash_charges + 1).min(tuning.dash_amount);
            debug!(
                "Dash charge refilled: {}/{}",
                state.dash_charges, tuning.dash_amount
            );
        }
    }
}

/// Spend a charge and enter the attack phase when a buffered press lands
/// with a charge available.
pub(crate) fn start_dash(
    tuning: Res<LocomotionTuning>,
    mut freeze: ResMut<FreezeFrame>,
    mut query: Query<&mut LocomotionState, With<Player>>,
) {
    for mut state in &mut query {
        if !(state.can_dash() && state.dash_buffer_timer > 0.0) {
            continue;
        }

        freeze.request(tuning.dash_sleep_time);

        state.dash_charges = state.dash_charges.saturating_sub(1);
        state.dash_buffer_timer = 0.0;
        state.grounded_countdown = 0.0;
        state.dash_phase = DashPhase::Attack;
        state.dash_phase_elapsed = 0.0;
        state.dash_end_velocity_set = false;

        // The dash takes the body away from the jump machine.
        state.is_jumping = false;
        state.is_jump_cut = false;

        debug!(
            "Dash started: direction={:?}, charges left {}",
            state.dash_direction, state.dash_charges
        );
    }
}

/// Advance the dash phase machine on elapsed scaled time.
pub(crate) fn advance_dash(
    tuning: Res<LocomotionTuning>,
    mut query: Query<&mut LocomotionState, With<Player>>,
) {
    for mut state in &mut query {
        match state.dash_phase {
            DashPhase::Attack if state.dash_phase_elapsed >= tuning.dash_attack_time => {
                state.dash_phase = DashPhase::End;
                state.dash_phase_elapsed = 0.0;
            }
            DashPhase::End if state.dash_phase_elapsed >= tuning.dash_end_time => {
                state.dash_phase = DashPhase::Inactive;
                debug!("Dash finished");
            }
            _ => {}
        }
    }
}

/// Physics-phase velocity writes for an active dash.
///
/// The attack phase overrides the full velocity every tick; the end phase
/// sets its slower hand-back speed exactly once and then lets the run model
/// blend from there.
pub(crate) fn drive_dash(
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&mut LocomotionState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        match state.dash_phase {
            DashPhase::Attack => {
                velocity.0 = state.dash_direction.normalize_or_zero() * tuning.dash_speed;
            }
            DashPhase::End if !state.dash_end_velocity_set => {
                state.dash_end_velocity_set = true;
                velocity.0 = state.dash_direction.normalize_or_zero() * tuning.dash_end_speed;
            }
            _ => {}
        }
    }
}
