//! Content domain: the locomotion tuning file and its validation.

mod loader;
mod validation;


pub use loader::{TUNING_PATH, TuningLoadError};
pub use validation::{TuningError, validate_tuning};

use bevy::prelude::*;

use crate::content::loader::load_locomotion_tuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_locomotion_tuning);
    }
}
