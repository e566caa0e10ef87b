//! Habitloop - gamified habit tracking
//!
//! Users track recurring habits, earn XP and in-app currency, and level up.
//! This crate is the computational core of that system: the XP-to-level
//! progression curve with its habit-capacity policy, and the streak
//! reconciliation that turns a tracking's completion history into a count
//! of consecutive periods kept.
//!
//! Storage, auth, and HTTP transport belong to the hosting application.
//! Every function here is handed already-fetched values and returns plain
//! results; nothing performs I/O or keeps state between calls.

pub mod config;
pub mod domain;
pub mod progression;
pub mod streak;
pub mod tracker;

pub use domain::*;
