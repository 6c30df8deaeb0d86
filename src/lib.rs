//! Synthetic disaster-relief volunteer roster: generation, team balancing,
//! aggregate statistics and filter queries over one immutable snapshot.

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod generator;
pub mod models;
pub mod report;
pub mod roster;
pub mod stats;
pub mod teams;

pub use config::RosterConfig;
pub use error::RosterError;
pub use filter::{TeamFilter, VolunteerFilter};
pub use roster::Roster;
