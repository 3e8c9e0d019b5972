//! Account-level statistics shapes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, Timestamp, UserId};

/// Filter for a statistics read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsQuery {
    /// Account whose events are aggregated.
    pub owner_id: UserId,

    /// Restrict to a single event, if set.
    pub event_id: Option<EventId>,

    /// Inclusive lower bound on log timestamps.
    pub from: Option<Timestamp>,

    /// Exclusive upper bound on log timestamps.
    pub until: Option<Timestamp>,
}

/// Per-event counters for the query window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPerformance {
    pub event_id: EventId,
    pub event_name: String,
    pub domain_code: String,
    pub visits: i64,
    pub coupons_issued: i64,
    pub coupons_used: i64,
}

impl EventPerformance {
    /// Fraction of issued coupons that were redeemed; zero when none were
    /// issued.
    pub fn conversion_rate(&self) -> f64 {
        if self.coupons_issued == 0 {
            0.0
        } else {
            self.coupons_used as f64 / self.coupons_issued as f64
        }
    }
}

/// One hour's worth of activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyCount {
    /// Start of the hour bucket, UTC.
    pub hour: Timestamp,
    pub visits: i64,
    pub coupons_issued: i64,
    pub coupons_used: i64,
}

/// The full statistics response for an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsOverview {
    pub events: Vec<EventPerformance>,
    pub hourly: Vec<HourlyCount>,

    /// Event with the highest conversion rate, if any event exists.
    pub best_event: Option<EventPerformance>,

    /// Event with the lowest conversion rate, if any event exists.
    pub worst_event: Option<EventPerformance>,
}

impl StatsOverview {
    /// Assembles the overview, deriving best and worst performers.
    pub fn from_counts(events: Vec<EventPerformance>, hourly: Vec<HourlyCount>) -> Self {
        let best_event = events
            .iter()
            .max_by(|a, b| a.conversion_rate().total_cmp(&b.conversion_rate()))
            .cloned();
        let worst_event = events
            .iter()
            .min_by(|a, b| a.conversion_rate().total_cmp(&b.conversion_rate()))
            .cloned();

        Self {
            events,
            hourly,
            best_event,
            worst_event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perf(name: &str, issued: i64, used: i64) -> EventPerformance {
        EventPerformance {
            event_id: EventId::new(),
            event_name: name.to_string(),
            domain_code: name.to_lowercase(),
            visits: 0,
            coupons_issued: issued,
            coupons_used: used,
        }
    }

    #[test]
    fn conversion_rate_is_zero_without_issuance() {
        assert_eq!(perf("a", 0, 0).conversion_rate(), 0.0);
    }

    #[test]
    fn best_and_worst_follow_conversion_rate() {
        let events = vec![perf("low", 10, 1), perf("high", 10, 9), perf("mid", 10, 5)];
        let overview = StatsOverview::from_counts(events, vec![]);

        assert_eq!(overview.best_event.unwrap().event_name, "high");
        assert_eq!(overview.worst_event.unwrap().event_name, "low");
    }

    #[test]
    fn empty_accounts_have_no_best_or_worst() {
        let overview = StatsOverview::from_counts(vec![], vec![]);
        assert!(overview.best_event.is_none());
        assert!(overview.worst_event.is_none());
    }
}
