//! Streak command implementation

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

use habitloop::config::Config;
use habitloop::domain::{CompletionEvent, RecurrencePeriod};
use habitloop::streak::compute_streak_with;
use habitloop::tracker::ClientOffset;

/// Compute the streak for a completion history read from a JSON file
pub fn streak_command(
    config: &Config,
    start: &str,
    period: &str,
    actions_path: &Path,
    now: Option<&str>,
    offset_ms: i64,
) -> Result<()> {
    let start: NaiveDate = start
        .parse()
        .with_context(|| format!("Invalid start date: {}", start))?;

    let period = RecurrencePeriod::from_str(period)
        .with_context(|| format!("Unknown period: {}", period))?;

    let content = std::fs::read_to_string(actions_path)
        .with_context(|| format!("Failed to read actions file: {}", actions_path.display()))?;
    let actions: Vec<CompletionEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse actions file: {}", actions_path.display()))?;

    let server_now = match now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("Invalid now instant: {}", raw))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    let now = ClientOffset::from_ms(offset_ms).apply(server_now);

    let streak = compute_streak_with(start, config.periods.days_for(period), now, &actions);
    println!("{}", streak);

    Ok(())
}
