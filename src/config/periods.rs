use serde::{Deserialize, Serialize};

use crate::domain::RecurrencePeriod;

/// Calendar days per recurrence period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodConfig {
    #[serde(default = "default_daily")]
    pub daily: i64,
    #[serde(default = "default_weekly")]
    pub weekly: i64,
    #[serde(default = "default_monthly")]
    pub monthly: i64,
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self {
            daily: default_daily(),
            weekly: default_weekly(),
            monthly: default_monthly(),
        }
    }
}

impl PeriodConfig {
    /// Step size in days for a period
    pub fn days_for(&self, period: RecurrencePeriod) -> i64 {
        match period {
            RecurrencePeriod::Daily => self.daily,
            RecurrencePeriod::Weekly => self.weekly,
            RecurrencePeriod::Monthly => self.monthly,
        }
    }
}

fn default_daily() -> i64 {
    1
}

fn default_weekly() -> i64 {
    7
}

fn default_monthly() -> i64 {
    30
}
