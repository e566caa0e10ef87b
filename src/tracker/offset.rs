//! Client clock-offset handling
//!
//! Clients report a coarse clock offset so the evaluation instant lines up
//! with what they see. The value is untrusted input: it is parsed leniently
//! and clamped before it can move "now". The engines themselves treat the
//! adjusted instant as opaque.

use chrono::{DateTime, Duration, Utc};
use tracing::warn;

/// Largest offset a client may apply, in milliseconds (24 hours)
const MAX_OFFSET_MS: i64 = 24 * 60 * 60 * 1000;

/// A validated client-reported clock offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientOffset(i64);

impl ClientOffset {
    /// Parse from an untrusted string; unparseable input means no offset.
    pub fn parse(raw: Option<&str>) -> Self {
        let ms = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(0);
        Self::from_ms(ms)
    }

    /// Clamp a raw millisecond offset into the allowed range.
    pub fn from_ms(ms: i64) -> Self {
        let clamped = ms.clamp(-MAX_OFFSET_MS, MAX_OFFSET_MS);
        if clamped != ms {
            warn!("client offset {}ms out of range, clamped to {}ms", ms, clamped);
        }
        Self(clamped)
    }

    pub fn as_ms(&self) -> i64 {
        self.0
    }

    /// The instant the engines should treat as "now"
    pub fn apply(&self, server_now: DateTime<Utc>) -> DateTime<Utc> {
        server_now
            .checked_add_signed(Duration::milliseconds(self.0))
            .unwrap_or(server_now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(ClientOffset::parse(Some("3600000")).as_ms(), 3_600_000);
        assert_eq!(ClientOffset::parse(Some("-7200000")).as_ms(), -7_200_000);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(ClientOffset::parse(Some("not-a-number")).as_ms(), 0);
        assert_eq!(ClientOffset::parse(Some("")).as_ms(), 0);
        assert_eq!(ClientOffset::parse(None).as_ms(), 0);
    }

    #[test]
    fn test_clamped_to_a_day() {
        assert_eq!(
            ClientOffset::from_ms(MAX_OFFSET_MS * 10).as_ms(),
            MAX_OFFSET_MS
        );
        assert_eq!(ClientOffset::from_ms(i64::MIN).as_ms(), -MAX_OFFSET_MS);
    }

    #[test]
    fn test_apply_shifts_now() {
        let now = chrono::NaiveDate::from_ymd_opt(2024, 1, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        let shifted = ClientOffset::from_ms(60_000).apply(now);
        assert_eq!(shifted - now, Duration::minutes(1));
    }
}
