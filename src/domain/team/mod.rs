// Team domain module
// Teams are read-only reference data supplied by the team directory

#![allow(clippy::module_inception)]

pub mod team;

pub use team::TeamInfo;
