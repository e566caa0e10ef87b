use serde::{Deserialize, Serialize};

use super::RecurrencePeriod;

/// A habit definition from the shared library, as fetched from storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub period: RecurrencePeriod,
    /// Hidden from the public library
    #[serde(default)]
    pub restricted: bool,
    #[serde(default)]
    pub owner: Option<String>,
    /// Measured goal for quantified habits (e.g. 10000 steps)
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(default)]
    pub target_value_unit: Option<String>,
}
