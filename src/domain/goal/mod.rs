// Goal domain module
// A goal event is the raw input the scorer leaderboard is built from

#![allow(clippy::module_inception)]

pub mod goal;

pub use goal::GoalEvent;
