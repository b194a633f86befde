//! FootyBot API Library
//!
//! Serves the top scorers leaderboard: goal events joined to their team's
//! crest, counted per player and ranked. The ranking itself lives in
//! [`domain::scorers`] and is pure; everything else is an adapter around it.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
