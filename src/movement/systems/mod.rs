//! Movement domain: system modules for the fixed-step locomotion pipeline.

pub(crate) mod input;
pub(crate) mod locomotion;
pub(crate) mod physics;
pub(crate) mod sensors;

pub(crate) use input::{queue_jump_press, read_input};
pub(crate) use locomotion::drive_locomotion;
pub(crate) use physics::{apply_gravity, rest_on_ladder_tops};
pub(crate) use sensors::sense_surroundings;
