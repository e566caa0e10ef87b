//! Habit capacity policy
//!
//! How many habits a user may track at once grows stepwise with level.

/// Maximum simultaneous trackings for a level
pub fn max_habits_for(level: u32) -> u32 {
    match level {
        0..=1 => 1,
        2..=4 => 2,
        5..=9 => 3,
        10..=24 => 4,
        _ => 5,
    }
}

/// True when the user may start tracking another habit
pub fn is_under_capacity(tracked_count: u32, level: u32) -> bool {
    tracked_count < max_habits_for(level)
}
