//! Core domain: shared resources for clock control.

use bevy::prelude::*;

/// Resource collecting freeze-frame requests.
///
/// Gameplay systems call [`FreezeFrame::request`] to ask for a short
/// full-simulation pause (hit-stop style). The core plugin services the
/// request at the end of the frame by zeroing the virtual clock's relative
/// speed, then counts the pause down on the real clock so it always ends
/// even while virtual time stands still. A new request while a pause is
/// running restarts the window.
#[derive(Resource, Debug, Default)]
pub struct FreezeFrame {
    pub(crate) pending: Option<f32>,
    pub(crate) remaining: f32,
}

impl FreezeFrame {
    pub fn request(&mut self, seconds: f32) {
        self.pending = Some(seconds);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }
}
