//! Locomotion domain: system modules for per-tick updates.

pub(crate) mod dash;
pub(crate) mod ground;
pub(crate) mod input;
pub(crate) mod jump;
pub(crate) mod run;
pub(crate) mod timers;

pub(crate) use dash::{advance_dash, drive_dash, refill_dash, start_dash};
pub(crate) use ground::detect_ground;
pub(crate) use input::{latch_press_buffers, read_input};
pub(crate) use jump::{apply_gravity, resolve_jump};
pub(crate) use run::{apply_run, update_facing};
pub(crate) use timers::tick_timers;
