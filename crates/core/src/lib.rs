//! Domain model for the LogiQuest game suite: player profile and progress,
//! trial definitions with their answer rules, the per-screen trial session
//! state machine, and the static content catalog the games draw from.
//!
//! Everything here is pure and synchronous. Persistence and orchestration
//! live in the `storage` and `services` crates.

pub mod content;
pub mod model;
pub mod session;
pub mod time;

pub use time::Clock;
