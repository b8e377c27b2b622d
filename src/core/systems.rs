//! Core domain: camera setup and freeze-frame servicing.

use bevy::prelude::*;

use crate::core::resources::FreezeFrame;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Service freeze-frame requests at the end of the frame.
///
/// Counts the pause down on the real clock; the virtual clock (and with it
/// the fixed-timestep accumulator) is stopped for the whole window.
pub(crate) fn apply_freeze_frame(
    real_time: Res<Time<Real>>,
    mut virtual_time: ResMut<Time<Virtual>>,
    mut freeze: ResMut<FreezeFrame>,
) {
    if let Some(seconds) = freeze.pending.take() {
        freeze.remaining = seconds;
        virtual_time.set_relative_speed(0.0);
        debug!("Freeze frame: pausing simulation for {}s", seconds);
        return;
    }

    if freeze.remaining > 0.0 {
        freeze.remaining -= real_time.delta_secs();
        if freeze.remaining <= 0.0 {
            freeze.remaining = 0.0;
            virtual_time.set_relative_speed(1.0);
            debug!("Freeze frame: resuming simulation");
        }
    }
}
