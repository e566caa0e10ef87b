use serde::{Deserialize, Serialize};

/// XP and currency amounts granted by the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardConfig {
    /// XP for completing a tracked habit
    #[serde(default = "default_tracking_xp")]
    pub tracking_xp: i64,
    /// Currency bonus when an XP grant crosses a level threshold
    #[serde(default = "default_levelup_money")]
    pub levelup_money: i64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            tracking_xp: default_tracking_xp(),
            levelup_money: default_levelup_money(),
        }
    }
}

fn default_tracking_xp() -> i64 {
    250
}

fn default_levelup_money() -> i64 {
    20
}
