//! Validation for loaded tuning values.

use crate::locomotion::LocomotionTuning;

/// A validation error naming the offending tuning field.
#[derive(Debug)]
pub struct TuningError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tuning field `{}` {}", self.field, self.message)
    }
}

/// Helper macro for the repeated range checks
macro_rules! check_finite_non_negative {
    ($errors:expr, $tuning:expr, $($field:ident),+ $(,)?) => {
        $(
            if !$tuning.$field.is_finite() || $tuning.$field < 0.0 {
                $errors.push(TuningError {
                    field: stringify!($field),
                    message: format!("must be finite and non-negative, got {}", $tuning.$field),
                });
            }
        )+
    };
}

macro_rules! check_positive {
    ($errors:expr, $tuning:expr, $($field:ident),+ $(,)?) => {
        $(
            if !$tuning.$field.is_finite() || $tuning.$field <= 0.0 {
                $errors.push(TuningError {
                    field: stringify!($field),
                    message: format!("must be finite and positive, got {}", $tuning.$field),
                });
            }
        )+
    };
}

/// Check every numeric tuning value.
/// Returns a list of errors, empty if the record is usable.
pub fn validate_tuning(tuning: &LocomotionTuning) -> Vec<TuningError> {
    let mut errors = Vec::new();

    check_positive!(
        errors,
        tuning,
        run_max_speed,
        gravity_scale,
        max_fall_speed,
        max_fast_fall_speed,
        jump_force,
        dash_speed,
        dash_end_speed,
    );

    check_finite_non_negative!(
        errors,
        tuning,
        run_accel_amount,
        run_deccel_amount,
        accel_in_air,
        deccel_in_air,
        fall_gravity_mult,
        fast_fall_gravity_mult,
        jump_cut_gravity_mult,
        jump_hang_gravity_mult,
        jump_hang_time_threshold,
        jump_hang_acceleration_mult,
        jump_hang_max_speed_mult,
        coyote_time,
        jump_input_buffer_time,
        dash_attack_time,
        dash_end_time,
        dash_sleep_time,
        dash_refill_time,
        dash_input_buffer_time,
    );

    if !tuning.dash_end_run_lerp.is_finite() || !(0.0..=1.0).contains(&tuning.dash_end_run_lerp) {
        errors.push(TuningError {
            field: "dash_end_run_lerp",
            message: format!("must be within [0, 1], got {}", tuning.dash_end_run_lerp),
        });
    }

    errors
}
