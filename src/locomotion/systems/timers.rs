//! Locomotion domain: per-tick timer bookkeeping.

use bevy::prelude::*;

use crate::locomotion::components::{LocomotionState, Player};

/// Decrement every countdown before any transition looks at them.
pub(crate) fn tick_timers(time: Res<Time>, mut query: Query<&mut LocomotionState, With<Player>>) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        // Keeps running negative while airborne; only the ground sensor
        // resets it.
        state.grounded_countdown -= dt;

        if state.jump_buffer_timer > 0.0 {
            state.jump_buffer_timer -= dt;
        }
        if state.dash_buffer_timer > 0.0 {
            state.dash_buffer_timer -= dt;
        }
        if state.dash_refilling && state.dash_refill_timer > 0.0 {
            state.dash_refill_timer -= dt;
        }
        if state.is_dashing() {
            state.dash_phase_elapsed += dt;
        }
    }
}
