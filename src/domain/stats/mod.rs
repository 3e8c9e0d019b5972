//! Statistics domain: pure aggregation arithmetic.
//!
//! All counting happens in SQL; this module only owns the conversion-rate
//! arithmetic and the best/worst selection applied on top of the counts.

mod overview;

pub use overview::{EventPerformance, HourlyCount, StatsOverview, StatsQuery};
