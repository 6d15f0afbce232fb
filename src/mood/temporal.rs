//! Temporal context derivation.
//!
//! [`TemporalContext`] is recomputed per request from the clock and
//! relationship metadata; there is no stored state. `now` is a parameter so
//! every derivation stays a pure, testable function.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Coarse time-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// Weekday/weekend split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    Weekday,
    Weekend,
}

/// Per-request temporal context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalContext {
    pub time_of_day: TimeOfDay,
    pub day_kind: DayKind,
    /// Whole days since the relationship was created.
    pub relationship_age_days: i64,
    /// Hours since the last interaction; 0 for a brand-new relationship
    /// (a missing last-interaction must not read as a long absence).
    pub hours_since_last_interaction: f32,
    /// Messages exchanged so far in this relationship.
    pub conversation_length: usize,
}

impl TemporalContext {
    /// Derive the temporal context for one request.
    pub fn derive(
        now: DateTime<Utc>,
        relationship_created_at: DateTime<Utc>,
        last_interaction_at: Option<DateTime<Utc>>,
        message_count: usize,
    ) -> Self {
        let time_of_day = match now.hour() {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        };
        let day_kind = match now.weekday() {
            Weekday::Sat | Weekday::Sun => DayKind::Weekend,
            _ => DayKind::Weekday,
        };
        let relationship_age_days = (now - relationship_created_at).num_days().max(0);
        let hours_since_last_interaction = last_interaction_at
            .map(|last| ((now - last).num_minutes().max(0) as f32) / 60.0)
            .unwrap_or(0.0);

        Self {
            time_of_day,
            day_kind,
            relationship_age_days,
            hours_since_last_interaction,
            conversation_length: message_count,
        }
    }

    /// Whether the relationship has been idle for more than a week.
    pub fn is_long_idle(&self) -> bool {
        self.hours_since_last_interaction > 168.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        // 2026-03-04 is a Wednesday.
        Utc.with_ymd_and_hms(2026, 3, 4, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(TemporalContext::derive(at(6), at(6), None, 0).time_of_day, TimeOfDay::Morning);
        assert_eq!(TemporalContext::derive(at(13), at(6), None, 0).time_of_day, TimeOfDay::Afternoon);
        assert_eq!(TemporalContext::derive(at(19), at(6), None, 0).time_of_day, TimeOfDay::Evening);
        assert_eq!(TemporalContext::derive(at(23), at(6), None, 0).time_of_day, TimeOfDay::Night);
        assert_eq!(TemporalContext::derive(at(2), at(2), None, 0).time_of_day, TimeOfDay::Night);
    }

    #[test]
    fn test_weekend_detection() {
        let saturday = Utc.with_ymd_and_hms(2026, 3, 7, 10, 0, 0).unwrap();
        assert_eq!(
            TemporalContext::derive(saturday, saturday, None, 0).day_kind,
            DayKind::Weekend
        );
        assert_eq!(TemporalContext::derive(at(10), at(10), None, 0).day_kind, DayKind::Weekday);
    }

    #[test]
    fn test_idle_hours_and_age() {
        let now = at(12);
        let created = now - chrono::Duration::days(30);
        let last = now - chrono::Duration::hours(200);
        let temporal = TemporalContext::derive(now, created, Some(last), 42);
        assert_eq!(temporal.relationship_age_days, 30);
        assert!(temporal.is_long_idle());
        assert_eq!(temporal.conversation_length, 42);
    }

    #[test]
    fn test_new_relationship_is_not_idle() {
        let temporal = TemporalContext::derive(at(12), at(12), None, 0);
        assert_eq!(temporal.hours_since_last_interaction, 0.0);
        assert!(!temporal.is_long_idle());
    }
}
