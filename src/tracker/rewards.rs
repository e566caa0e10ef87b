//! Reward grants for tracking completions

use crate::config::RewardConfig;
use crate::domain::{Profile, Reward};
use crate::progression::{award_xp, XpAward};

use super::error::TrackerError;

/// Compute the reward for completing a tracked habit.
///
/// XP comes from config; crossing a level threshold also grants the
/// currency bonus. The returned row is what the caller persists to the
/// reward ledger before updating the profile totals.
pub fn tracking_reward(
    rewards: &RewardConfig,
    profile: &Profile,
    tracking_id: i64,
) -> Result<(Reward, XpAward), TrackerError> {
    let award = award_xp(profile.xp, rewards.tracking_xp)?;
    let money = if award.level_up.is_some() {
        rewards.levelup_money
    } else {
        0
    };

    let reward = Reward {
        user: profile.id.clone(),
        reason: "tracking".to_string(),
        identifier: tracking_id.to_string(),
        xp: rewards.tracking_xp,
        money,
    };

    Ok((reward, award))
}
