//! GetStatsOverviewHandler - read-only reporting for an account.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::stats::{StatsOverview, StatsQuery};
use crate::ports::StatsReader;

/// Handler assembling the statistics overview.
pub struct GetStatsOverviewHandler {
    reader: Arc<dyn StatsReader>,
}

impl GetStatsOverviewHandler {
    pub fn new(reader: Arc<dyn StatsReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: StatsQuery) -> Result<StatsOverview, DomainError> {
        let events = self.reader.event_counts(&query).await?;
        let hourly = self.reader.hourly_counts(&query).await?;
        Ok(StatsOverview::from_counts(events, hourly))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EventId, UserId};
    use crate::domain::stats::{EventPerformance, HourlyCount};
    use async_trait::async_trait;

    struct FixedReader {
        events: Vec<EventPerformance>,
    }

    #[async_trait]
    impl StatsReader for FixedReader {
        async fn event_counts(
            &self,
            _query: &StatsQuery,
        ) -> Result<Vec<EventPerformance>, DomainError> {
            Ok(self.events.clone())
        }

        async fn hourly_counts(
            &self,
            _query: &StatsQuery,
        ) -> Result<Vec<HourlyCount>, DomainError> {
            Ok(vec![])
        }
    }

    fn perf(name: &str, issued: i64, used: i64) -> EventPerformance {
        EventPerformance {
            event_id: EventId::new(),
            event_name: name.to_string(),
            domain_code: name.to_string(),
            visits: 0,
            coupons_issued: issued,
            coupons_used: used,
        }
    }

    #[tokio::test]
    async fn overview_derives_the_best_performer() {
        let handler = GetStatsOverviewHandler::new(Arc::new(FixedReader {
            events: vec![perf("a", 4, 1), perf("b", 4, 3)],
        }));

        let overview = handler
            .handle(StatsQuery {
                owner_id: UserId::new(),
                event_id: None,
                from: None,
                until: None,
            })
            .await
            .unwrap();

        assert_eq!(overview.best_event.unwrap().event_name, "b");
        assert_eq!(overview.worst_event.unwrap().event_name, "a");
    }
}
