//! Shared test fixtures for scheduleague crates.
//!
//! This crate provides data builders for testing. It depends only on
//! `scheduleague-core` so every other crate can use it as a dev-dependency.
//!
//! - [`league`] - teams, venues and whole schedules
//! - [`matches`] - datetime helpers and match builders
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! scheduleague-test = { workspace = true }
//! ```
//!
//! ```
//! use scheduleague_test::{at, league::teams, matches::assigned};
//!
//! let teams = teams(4);
//! let m = assigned(0, 1, at(2024, 9, 9, 7, 0), 1, 1, 2);
//! assert_eq!(teams.len(), 4);
//! assert!(m.contains_team(teams[0].id));
//! ```

pub mod league;
pub mod matches;

pub use league::{round_robin_schedule, teams, venues};
pub use matches::{assigned, at, open};
