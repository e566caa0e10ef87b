//! Period boundary generation

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Upper bound on the days-per-period step; anything beyond a year is a
/// broken mapping, not a recurrence.
const MAX_STEP_DAYS: i64 = 366;

/// Internal failure during streak computation. Never escapes the public
/// contract; the engine degrades to a zero streak instead.
#[derive(Debug, thiserror::Error)]
pub enum StreakError {
    #[error("step days must be in 1..=366, got {0}")]
    BadStep(i64),

    #[error("period boundary arithmetic overflowed stepping from {0}")]
    DateOverflow(NaiveDate),

    #[error("boundary generation produced no entries")]
    NoBoundaries,
}

/// Generate period boundaries for a tracking, newest first.
///
/// Boundaries step forward from the start date (midnight UTC) one period at
/// a time until they reach or pass `now`. The returned sequence is strictly
/// descending: index 0 is the first boundary at or after `now`, the last
/// entry is the start itself.
pub fn period_boundaries(
    start: NaiveDate,
    step_days: i64,
    now: DateTime<Utc>,
) -> Result<Vec<DateTime<Utc>>, StreakError> {
    if step_days < 1 || step_days > MAX_STEP_DAYS {
        return Err(StreakError::BadStep(step_days));
    }

    let step = Duration::days(step_days);
    let mut cursor = start.and_time(NaiveTime::MIN).and_utc();
    let mut boundaries = Vec::new();
    while cursor < now {
        boundaries.push(cursor);
        cursor = cursor
            .checked_add_signed(step)
            .ok_or(StreakError::DateOverflow(start))?;
    }
    boundaries.push(cursor);
    boundaries.reverse();
    Ok(boundaries)
}
