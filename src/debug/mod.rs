//! Debug domain: F3 overlay with live locomotion state.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::FreezeFrame;
use crate::locomotion::{DashPhase, LocomotionState, LocomotionTuning, Player};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlayState>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(Update, (toggle_overlay, update_overlay).chain());
    }
}

#[derive(Resource, Debug, Default)]
struct DebugOverlayState {
    visible: bool,
}

/// Marker for the overlay text node
#[derive(Component)]
struct DebugOverlayText;

fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        DebugOverlayText,
        Text::new(""),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.9, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(8.0),
            top: Val::Px(8.0),
            ..default()
        },
        Visibility::Hidden,
    ));
}

fn toggle_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut overlay: ResMut<DebugOverlayState>,
    mut query: Query<&mut Visibility, With<DebugOverlayText>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    overlay.visible = !overlay.visible;
    for mut visibility in &mut query {
        *visibility = if overlay.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

fn update_overlay(
    overlay: Res<DebugOverlayState>,
    freeze: Res<FreezeFrame>,
    tuning: Res<LocomotionTuning>,
    player: Query<(&LocomotionState, &LinearVelocity, &GravityScale), With<Player>>,
    mut text_query: Query<&mut Text, With<DebugOverlayText>>,
) {
    if !overlay.visible {
        return;
    }
    let Ok((state, velocity, gravity)) = player.single() else {
        return;
    };
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    let phase = match state.dash_phase {
        DashPhase::Inactive => "inactive",
        DashPhase::Attack => "attack",
        DashPhase::End => "end",
    };

    text.0 = format!(
        "vel ({:.0}, {:.0})  gravity scale {:.2}\n\
         grounded countdown {:.3}  facing {:?}\n\
         jump: rising={} cut={} falling={} buffer {:.3}\n\
         dash: {}/{} phase {} elapsed {:.3} buffer {:.3}\n\
         freeze {}",
        velocity.x,
        velocity.y,
        gravity.0,
        state.grounded_countdown,
        state.facing,
        state.is_jumping,
        state.is_jump_cut,
        state.is_jump_falling,
        state.jump_buffer_timer,
        state.dash_charges,
        tuning.dash_amount,
        phase,
        state.dash_phase_elapsed,
        state.dash_buffer_timer,
        if freeze.is_active() { "on" } else { "off" },
    );
}
