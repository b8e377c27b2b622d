//! Stage domain: demo arena geometry, player spawn, and facing visuals.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{
    BASE_GRAVITY_STRENGTH, Facing, GameLayer, Ground, LocomotionState, LocomotionTuning,
    PLAYER_SIZE, Player,
};

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Gravity(Vec2::NEG_Y * BASE_GRAVITY_STRENGTH))
            .add_systems(Startup, (spawn_stage, spawn_player))
            .add_systems(Update, sync_facing_visuals);
    }
}

fn spawn_player(mut commands: Commands, tuning: Res<LocomotionTuning>) {
    commands.spawn((
        (
            Player,
            LocomotionState {
                dash_charges: tuning.dash_amount,
                ..default()
            },
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, -100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.gravity_scale),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));

    info!(
        "Player spawned: full jump peaks at {:.0} units after {:.2}s",
        tuning.jump_apex_height(),
        tuning.jump_apex_time()
    );
}

fn spawn_stage(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor
    spawn_slab(
        &mut commands,
        ground_color,
        Vec2::new(1000.0, 40.0),
        Vec2::new(0.0, -220.0),
    );

    // Side walls
    spawn_slab(
        &mut commands,
        wall_color,
        Vec2::new(40.0, 560.0),
        Vec2::new(-520.0, 60.0),
    );
    spawn_slab(
        &mut commands,
        wall_color,
        Vec2::new(40.0, 560.0),
        Vec2::new(520.0, 60.0),
    );

    // Floating platforms at increasing heights
    spawn_slab(
        &mut commands,
        platform_color,
        Vec2::new(160.0, 20.0),
        Vec2::new(-280.0, -110.0),
    );
    spawn_slab(
        &mut commands,
        platform_color,
        Vec2::new(160.0, 20.0),
        Vec2::new(280.0, -40.0),
    );
    spawn_slab(
        &mut commands,
        platform_color,
        Vec2::new(120.0, 20.0),
        Vec2::new(0.0, 50.0),
    );
}

fn spawn_slab(commands: &mut Commands, color: Color, size: Vec2, position: Vec2) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

fn sync_facing_visuals(mut query: Query<(&LocomotionState, &mut Sprite), With<Player>>) {
    for (state, mut sprite) in &mut query {
        sprite.flip_x = state.facing == Facing::Left;
    }
}
