//! Core domain: camera setup and the freeze-frame clock gate.

mod resources;
mod systems;


pub use resources::FreezeFrame;

use bevy::prelude::*;

use crate::core::systems::{apply_freeze_frame, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FreezeFrame>()
            .add_systems(Startup, setup_camera)
            .add_systems(PostUpdate, apply_freeze_frame);
    }
}
