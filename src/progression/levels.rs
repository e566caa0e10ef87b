//! XP and level system
//!
//! Levels are defined by a threshold curve rather than a fixed table: the
//! XP span of the k-th level is floor(1.01^k * 1000), so each level costs
//! about one percent more than the one before it. A level is found by
//! walking the cumulative sums of that curve until one exceeds the XP
//! total.

use std::sync::RwLock;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// XP span of the first level
const BASE_SPAN: f64 = 1000.0;

/// Per-level growth factor of the span curve
const GROWTH: f64 = 1.01;

/// Cumulative thresholds, one entry per level: entry n-1 holds the total XP
/// at which level n ends. Append-only; entries are deterministic, so
/// concurrent extension always agrees.
static CUMULATIVE: Lazy<RwLock<Vec<u64>>> = Lazy::new(|| RwLock::new(Vec::new()));

#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    #[error("XP must be non-negative, got {0}")]
    NegativeXp(i64),

    #[error("XP award must be non-negative, got {0}")]
    NegativeAward(i64),

    #[error("XP total overflowed")]
    XpOverflow,
}

/// Where a cumulative XP total sits on the level curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    pub current: u32,
    pub next: u32,
    /// Total XP at which the current level began
    pub floor_xp: u64,
    /// Total XP at which the next level begins
    pub ceiling_xp: u64,
    pub xp: u64,
}

impl LevelDescriptor {
    /// XP still needed to reach the next level
    pub fn xp_to_next(&self) -> u64 {
        self.ceiling_xp - self.xp
    }

    /// Progress through the current level (0.0 - 1.0)
    pub fn progress(&self) -> f32 {
        let span = self.ceiling_xp - self.floor_xp;
        if span == 0 {
            1.0
        } else {
            (self.xp - self.floor_xp) as f32 / span as f32
        }
    }
}

/// A level up event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

/// Outcome of granting XP to a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpAward {
    pub amount: i64,
    pub new_total: i64,
    pub level: LevelDescriptor,
    pub level_up: Option<LevelUp>,
}

/// Compute the level descriptor for a cumulative XP total.
///
/// The current level is the smallest n whose cumulative threshold exceeds
/// `xp`; zero XP lands in level 1, which spans [0, 1000).
pub fn level_for(xp: i64) -> Result<LevelDescriptor, ProgressionError> {
    if xp < 0 {
        return Err(ProgressionError::NegativeXp(xp));
    }
    let xp = xp as u64;

    let (current, floor_xp, ceiling_xp) = locate(xp);

    Ok(LevelDescriptor {
        current,
        next: current + 1,
        floor_xp,
        ceiling_xp,
        xp,
    })
}

/// Recompute descriptors around an XP grant and detect a level up.
pub fn award_xp(current_xp: i64, amount: i64) -> Result<XpAward, ProgressionError> {
    if amount < 0 {
        return Err(ProgressionError::NegativeAward(amount));
    }

    let before = level_for(current_xp)?;
    let new_total = current_xp
        .checked_add(amount)
        .ok_or(ProgressionError::XpOverflow)?;
    let after = level_for(new_total)?;

    let level_up = (after.current > before.current).then(|| LevelUp {
        old_level: before.current,
        new_level: after.current,
    });

    Ok(XpAward {
        amount,
        new_total,
        level: after,
        level_up,
    })
}

/// XP span of the level at zero-indexed curve position `k`
fn level_span(k: usize) -> u64 {
    (GROWTH.powi(k as i32) * BASE_SPAN).floor() as u64
}

/// Find (level, floor, ceiling) for an XP total, extending the cache if the
/// total outruns the published thresholds.
fn locate(xp: u64) -> (u32, u64, u64) {
    {
        let sums = CUMULATIVE.read().expect("lock");
        if let Some(hit) = scan(&sums, xp) {
            return hit;
        }
    }

    let mut sums = CUMULATIVE.write().expect("lock");
    // Another caller may have extended while we waited for the write lock.
    if let Some(hit) = scan(&sums, xp) {
        return hit;
    }

    loop {
        let k = sums.len();
        let prev = sums.last().copied().unwrap_or(0);
        let sum = prev + level_span(k);
        sums.push(sum);
        if sum > xp {
            debug!("extended level threshold cache to {} entries", sums.len());
            let floor = if k == 0 { 0 } else { sums[k - 1] };
            return ((k + 1) as u32, floor, sum);
        }
    }
}

/// Scan published thresholds for the smallest one strictly above `xp`.
///
/// The sums are strictly increasing, so the count of sums at or below `xp`
/// is the zero-indexed level.
fn scan(sums: &[u64], xp: u64) -> Option<(u32, u64, u64)> {
    let idx = sums.partition_point(|&s| s <= xp);
    let ceiling = *sums.get(idx)?;
    let floor = if idx == 0 { 0 } else { sums[idx - 1] };
    Some(((idx + 1) as u32, floor, ceiling))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_bootstrap() {
        let level = level_for(0).unwrap();
        assert_eq!(level.current, 1);
        assert_eq!(level.next, 2);
        assert_eq!(level.floor_xp, 0);
        assert_eq!(level.ceiling_xp, 1000);
        assert_eq!(level.xp, 0);
    }

    #[test]
    fn test_curve_thresholds() {
        // Spans: 1000, 1010, 1020, 1030 -> sums 1000, 2010, 3030, 4060
        assert_eq!(level_for(999).unwrap().current, 1);
        assert_eq!(level_for(1000).unwrap().current, 2);
        assert_eq!(level_for(2009).unwrap().current, 2);
        assert_eq!(level_for(2010).unwrap().current, 3);
        assert_eq!(level_for(3030).unwrap().current, 4);
        assert_eq!(level_for(4059).unwrap().current, 4);
        assert_eq!(level_for(4060).unwrap().current, 5);
    }

    #[test]
    fn test_descriptor_invariant() {
        for xp in (0..60_000).step_by(7) {
            let level = level_for(xp).unwrap();
            assert!(level.floor_xp <= level.xp, "floor > xp at {}", xp);
            assert!(level.xp < level.ceiling_xp, "xp >= ceiling at {}", xp);
            assert!(level.current >= 1);
            assert_eq!(level.next, level.current + 1);
        }
    }

    #[test]
    fn test_monotone_in_xp() {
        let mut last = 0;
        for xp in (0..100_000).step_by(97) {
            let current = level_for(xp).unwrap().current;
            assert!(current >= last, "level decreased at {}", xp);
            last = current;
        }
    }

    #[test]
    fn test_negative_xp_rejected() {
        assert!(matches!(
            level_for(-1),
            Err(ProgressionError::NegativeXp(-1))
        ));
    }

    #[test]
    fn test_idempotent() {
        let a = level_for(123_456).unwrap();
        let b = level_for(123_456).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_large_xp_terminates() {
        let level = level_for(i64::MAX).unwrap();
        assert!(level.current > 1);
        assert!(level.floor_xp <= level.xp);
        assert!(level.xp < level.ceiling_xp);
    }

    #[test]
    fn test_progress() {
        let level = level_for(500).unwrap();
        assert!((level.progress() - 0.5).abs() < 0.01);
        assert_eq!(level.xp_to_next(), 500);
    }

    #[test]
    fn test_award_xp_level_up() {
        let award = award_xp(900, 250).unwrap();
        assert_eq!(award.new_total, 1150);
        assert_eq!(award.level.current, 2);
        assert_eq!(
            award.level_up,
            Some(LevelUp {
                old_level: 1,
                new_level: 2
            })
        );
    }

    #[test]
    fn test_award_xp_no_level_up() {
        let award = award_xp(0, 250).unwrap();
        assert_eq!(award.level.current, 1);
        assert_eq!(award.level_up, None);
    }

    #[test]
    fn test_award_xp_invalid() {
        assert!(matches!(
            award_xp(100, -5),
            Err(ProgressionError::NegativeAward(-5))
        ));
        assert!(matches!(
            award_xp(i64::MAX, 1),
            Err(ProgressionError::XpOverflow)
        ));
    }
}
