//! Locomotion domain: game-feel character control for the player body.
//!
//! Every frame splits into two phases. The `Update` chain samples input,
//! ticks timers, senses ground, and resolves jump/dash transitions, in that
//! order; the `FixedUpdate` chain then writes velocities, forces, and the
//! gravity scale for the physics step to integrate. Timer decrements always
//! run before transitions, and transitions before physics writes.

mod components;
mod resources;
mod systems;


pub use components::{DashPhase, Facing, GameLayer, Ground, LocomotionState, Player};
pub(crate) use components::PLAYER_SIZE;
pub use resources::{BASE_GRAVITY_STRENGTH, LocomotionInput, LocomotionTuning};

use bevy::prelude::*;

use crate::locomotion::systems::{
    advance_dash, apply_gravity, apply_run, detect_ground, drive_dash, latch_press_buffers,
    read_input, refill_dash, resolve_jump, start_dash, tick_timers, update_facing,
};

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionInput>()
            .add_systems(
                Update,
                (
                    read_input,
                    latch_press_buffers,
                    tick_timers,
                    detect_ground,
                    resolve_jump,
                    refill_dash,
                    start_dash,
                    advance_dash,
                    update_facing,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, (drive_dash, apply_gravity, apply_run).chain());
    }
}
