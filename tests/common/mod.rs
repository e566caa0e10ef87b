//! Shared helpers for integration tests
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};

use habitloop::domain::{CompletionEvent, Habit, RecurrencePeriod, Tracking};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    date(y, m, d).and_hms_opt(h, 0, 0).unwrap().and_utc()
}

pub fn events(dates: &[DateTime<Utc>]) -> Vec<CompletionEvent> {
    dates.iter().map(|d| CompletionEvent::new(*d)).collect()
}

pub fn tracking(owner: &str, start: Option<NaiveDate>, restricted: bool) -> Tracking {
    Tracking {
        id: 11,
        source: 7,
        owner: owner.to_string(),
        start_date: start,
        restricted,
        stopped: false,
    }
}

pub fn habit(period: RecurrencePeriod) -> Habit {
    Habit {
        id: 7,
        title: "Morning run".to_string(),
        category: "health".to_string(),
        period,
        restricted: false,
        owner: Some("user-1".to_string()),
        target_value: None,
        target_value_unit: None,
    }
}
