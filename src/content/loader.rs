//! Loader for the RON tuning file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::validation::validate_tuning;
use crate::locomotion::LocomotionTuning;

/// Where the tuning file lives, relative to the working directory.
pub const TUNING_PATH: &str = "assets/config/locomotion.ron";

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub(crate) fn parse_tuning(
    file_name: &str,
    contents: &str,
) -> Result<LocomotionTuning, TuningLoadError> {
    ron_options().from_str(contents).map_err(|e| TuningLoadError {
        file: file_name.to_string(),
        message: format!("Parse error: {}", e),
    })
}

fn load_tuning_file(path: &Path) -> Result<LocomotionTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&file_name, &contents)
}

/// Load, validate, and insert the tuning resource before anything else
/// starts up.
///
/// A missing file falls back to built-in defaults with a warning; a file
/// that fails to parse or validate aborts startup with every problem
/// listed, rather than running with silently wrong game feel.
pub(crate) fn load_locomotion_tuning(mut commands: Commands) {
    let path = Path::new(TUNING_PATH);

    let tuning = if path.exists() {
        match load_tuning_file(path) {
            Ok(tuning) => {
                info!("Loaded locomotion tuning from {}", TUNING_PATH);
                tuning
            }
            Err(e) => panic!("{}", e),
        }
    } else {
        warn!("{} not found, using built-in tuning defaults", TUNING_PATH);
        LocomotionTuning::default()
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        panic!(
            "Invalid locomotion tuning in {} ({} problem(s)):\n{}",
            TUNING_PATH,
            errors.len(),
            details.join("\n")
        );
    }

    commands.insert_resource(tuning);
}
