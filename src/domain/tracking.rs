use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A user's subscription to a habit, as fetched from storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracking {
    pub id: i64,
    /// Habit this tracking was created from
    pub source: i64,
    pub owner: String,
    /// Calendar date tracking began, no time component
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Only the owner may read streaks and history
    #[serde(default)]
    pub restricted: bool,
    /// Stopped trackings keep their history but no longer accrue
    #[serde(default)]
    pub stopped: bool,
}

impl Tracking {
    pub fn is_active(&self) -> bool {
        !self.stopped
    }
}

/// One logged completion of a tracked habit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub date: DateTime<Utc>,
    /// Measured amount for quantified habits
    #[serde(default)]
    pub value: Option<f64>,
}

impl CompletionEvent {
    pub fn new(date: DateTime<Utc>) -> Self {
        Self { date, value: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_event_from_json() {
        let events: Vec<CompletionEvent> =
            serde_json::from_str(r#"[{"date": "2024-01-03T18:30:00Z"}, {"date": "2024-01-01T09:00:00Z", "value": 4.5}]"#)
                .unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].value, None);
        assert_eq!(events[1].value, Some(4.5));
    }

    #[test]
    fn test_tracking_active() {
        let tracking = Tracking {
            id: 1,
            source: 7,
            owner: "user-1".to_string(),
            start_date: None,
            restricted: false,
            stopped: true,
        };
        assert!(!tracking.is_active());
    }
}
