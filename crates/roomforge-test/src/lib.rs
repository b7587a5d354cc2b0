//! Shared test fixtures for RoomForge crates.
//!
//! This crate provides builders for input snapshots and work units.
//! It depends only on `roomforge-core` so the solver can use it as a
//! dev-dependency.
//!
//! - [`staff`] - Employees and teams
//! - [`rooms`] - Room tasks
//! - [`units`] - Work units with pre-assigned tasks
//! - [`hotel`] - A realistic hotel day
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! roomforge-test = { workspace = true }
//! ```

pub mod hotel;
pub mod rooms;
pub mod staff;
pub mod units;

pub use hotel::{quiet_day, sample_day};
pub use rooms::{room_task, room_task_with_note};
pub use staff::{off_duty, team_member, worker};
pub use units::{solo_unit, team_unit};
