//! Authorization and capacity gates

use chrono::{DateTime, Utc};

use crate::config::PeriodConfig;
use crate::domain::{CompletionEvent, Habit, Tracking};
use crate::progression::{level_for, max_habits_for};
use crate::streak::compute_streak_with;

use super::error::TrackerError;

/// Resolve a fetched tracking/habit pair, enforcing the restricted-owner
/// rule. The streak engine must not run for rows that fail this gate.
pub fn resolve_tracking<'a>(
    tracking: Option<&'a Tracking>,
    habit: Option<&'a Habit>,
    requester: &str,
) -> Result<(&'a Tracking, &'a Habit), TrackerError> {
    let tracking = tracking.ok_or(TrackerError::TrackingNotFound)?;
    let habit = habit.ok_or(TrackerError::HabitNotFound)?;
    if tracking.restricted && tracking.owner != requester {
        return Err(TrackerError::Unauthorized);
    }
    Ok((tracking, habit))
}

/// Evaluate the streak for a fetched tracking.
///
/// `actions` must be the tracking's full completion history; the matching
/// pass walks all of it. `now` is the already offset-adjusted instant.
pub fn streak_for_tracking(
    periods: &PeriodConfig,
    tracking: Option<&Tracking>,
    habit: Option<&Habit>,
    requester: &str,
    now: DateTime<Utc>,
    actions: &[CompletionEvent],
) -> Result<u32, TrackerError> {
    let (tracking, habit) = resolve_tracking(tracking, habit, requester)?;
    let start = tracking.start_date.ok_or(TrackerError::InvalidStartDate)?;
    Ok(compute_streak_with(
        start,
        periods.days_for(habit.period),
        now,
        actions,
    ))
}

/// Reject a new tracking when the user's level cannot hold another habit.
pub fn authorize_new_tracking(xp: i64, tracked_count: u32) -> Result<(), TrackerError> {
    let level = level_for(xp)?;
    let maximum = max_habits_for(level.current);
    if tracked_count >= maximum {
        return Err(TrackerError::CapacityExceeded {
            tracked: tracked_count,
            maximum,
        });
    }
    Ok(())
}
