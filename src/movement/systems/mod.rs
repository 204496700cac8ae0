//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod motion;

pub(crate) use collisions::sample_ground_contacts;
pub(crate) use input::{dispatch_input, read_input};
pub(crate) use motion::{apply_config_changes, apply_motion_resets, tick_motion_controllers};
