//! Movement domain: system modules for locomotion updates.

pub(crate) mod ground;
pub(crate) mod input;
pub(crate) mod movement;

#[cfg(test)]
mod tests;

pub(crate) use input::read_input;
pub(crate) use movement::{drive_controllers, handle_footsteps, write_effects};
