//! XP progression: the level curve and the habit capacity policy
//!
//! Pure derivations over a profile's cumulative XP. Nothing here is
//! persisted; descriptors are recomputed on every request.

mod capacity;
mod levels;

pub use capacity::{is_under_capacity, max_habits_for};
pub use levels::{award_xp, level_for, LevelDescriptor, LevelUp, ProgressionError, XpAward};
