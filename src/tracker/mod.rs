//! Habit tracking operations
//!
//! The request layer fetches rows from storage, then calls in here: the
//! authorization gate for restricted trackings, the capacity gate for new
//! trackings, streak evaluation, and reward grants. Nothing in this module
//! performs I/O; callers hand in already-fetched values.

mod access;
mod error;
mod offset;
mod rewards;

pub use access::{authorize_new_tracking, resolve_tracking, streak_for_tracking};
pub use error::TrackerError;
pub use offset::ClientOffset;
pub use rewards::tracking_reward;
