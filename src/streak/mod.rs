//! Streak reconciliation
//!
//! Decides how many consecutive periods of a habit tracking have at least
//! one completion, given the tracking's start date, its recurrence period,
//! the evaluation instant, and the full completion history.

mod boundaries;
mod engine;

pub use boundaries::{period_boundaries, StreakError};
pub use engine::{compute_streak, compute_streak_with};
