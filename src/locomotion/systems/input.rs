//! Locomotion domain: input sampling and press-buffer latching.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::components::{LocomotionState, Player};
use crate::locomotion::resources::{LocomotionInput, LocomotionTuning};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<LocomotionInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_just_released =
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
    input.dash_just_pressed =
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);
}

/// Turn this frame's press/release edges into buffered state. Runs before
/// the timer tick so a fresh buffer survives its full window.
pub(crate) fn latch_press_buffers(
    input: Res<LocomotionInput>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&mut LocomotionState, &LinearVelocity), With<Player>>,
) {
    for (mut state, velocity) in &mut query {
        if input.jump_just_pressed {
            state.press_jump(&tuning);
        }
        if input.jump_just_released {
            state.release_jump(velocity.y);
        }
        if input.dash_just_pressed {
            state.press_dash(&tuning);
        }
    }
}
