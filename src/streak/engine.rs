//! Windowed streak matching
//!
//! Completion events are walked newest-first against the period boundaries.
//! Each event must land in the next-older period window; the newest slot is
//! granted a single period of slack so a still-open current period does not
//! break the streak on its own. A gap anywhere deeper ends the streak.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;

use crate::domain::{CompletionEvent, RecurrencePeriod};

use super::boundaries::{period_boundaries, StreakError};

/// Matching progress: which boundary slot the next event must land in, and
/// whether the one-shot grace has been spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Matching { slot: usize, grace_used: bool },
    Halted,
}

/// Count consecutive periods with at least one completion.
///
/// Never fails: on any internal error the streak reads as zero, so a habit
/// shows as having no active streak rather than breaking the page.
pub fn compute_streak(
    start: NaiveDate,
    period: RecurrencePeriod,
    now: DateTime<Utc>,
    actions: &[CompletionEvent],
) -> u32 {
    compute_streak_with(start, period.days(), now, actions)
}

/// Like [`compute_streak`], with the days-per-period step supplied by the
/// caller (the application config owns the canonical mapping).
pub fn compute_streak_with(
    start: NaiveDate,
    step_days: i64,
    now: DateTime<Utc>,
    actions: &[CompletionEvent],
) -> u32 {
    match try_compute(start, step_days, now, actions) {
        Ok(streak) => streak,
        Err(err) => {
            warn!("streak computation degraded to 0: {}", err);
            0
        }
    }
}

fn try_compute(
    start: NaiveDate,
    step_days: i64,
    now: DateTime<Utc>,
    actions: &[CompletionEvent],
) -> Result<u32, StreakError> {
    let boundaries = period_boundaries(start, step_days, now)?;
    if boundaries.is_empty() {
        return Err(StreakError::NoBoundaries);
    }

    // Canonical order for the matching pass: most recent first.
    let mut sorted: Vec<DateTime<Utc>> = actions.iter().map(|a| a.date).collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 0u32;
    let mut phase = Phase::Matching {
        slot: 0,
        grace_used: false,
    };

    for action in sorted {
        let Phase::Matching { slot, grace_used } = phase else {
            break;
        };
        let (next, matched) = advance(&boundaries, slot, grace_used, action);
        if matched {
            streak += 1;
        }
        phase = next;
    }

    Ok(streak)
}

/// One transition of the matching state machine.
///
/// Transitions: match -> next slot; first miss at the newest slot with
/// grace unspent -> retry the same event one window older; any other miss
/// -> halt.
fn advance(
    boundaries: &[DateTime<Utc>],
    slot: usize,
    grace_used: bool,
    action: DateTime<Utc>,
) -> (Phase, bool) {
    // The slot needs both of its unshifted bounds; past them the history
    // is exhausted and the streak simply ends.
    if slot + 1 >= boundaries.len() {
        return (Phase::Halted, false);
    }

    let mut grace_used = grace_used;
    loop {
        let shift = grace_used as usize;
        if in_window(boundaries, slot + shift, action) {
            return (
                Phase::Matching {
                    slot: slot + 1,
                    grace_used,
                },
                true,
            );
        }
        // The newest slot gets one period of slack, exactly once: the
        // current period may not have an action yet without the streak
        // counting as broken.
        if slot == 0 && !grace_used {
            grace_used = true;
            continue;
        }
        return (Phase::Halted, false);
    }
}

/// Whether the action falls in the half-open window
/// (boundaries[upper + 1], boundaries[upper]]. A window missing either
/// bound matches nothing.
fn in_window(boundaries: &[DateTime<Utc>], upper: usize, action: DateTime<Utc>) -> bool {
    match (boundaries.get(upper), boundaries.get(upper + 1)) {
        (Some(&hi), Some(&lo)) => action <= hi && action > lo,
        _ => false,
    }
}
