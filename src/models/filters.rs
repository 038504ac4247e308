//! Query-variant filters for the analytics endpoints.
//!
//! Each filter value maps to exactly one query-string token and therefore
//! exactly one cache key variant. Two views asking for the same filter share
//! a cache entry; different filters never collide.

/// Time window filter for dashboard and financial statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeFilter {
    /// No time restriction.
    #[default]
    All,
    /// Today only.
    Today,
    /// Yesterday only.
    Yesterday,
    /// Rolling last seven days.
    Last7Days,
}

impl TimeFilter {
    /// All selectable filters, in display order.
    pub const ALL: [TimeFilter; 4] = [
        TimeFilter::Today,
        TimeFilter::Yesterday,
        TimeFilter::Last7Days,
        TimeFilter::All,
    ];

    /// Query-string token understood by the API (`?timeFilter=...`).
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Last7Days => "7days",
        }
    }

    /// Human-readable label for filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Time",
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::Last7Days => "Last 7 Days",
        }
    }
}

/// Time range selector for the request-traffic widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeRange {
    /// Last hour.
    LastHour,
    /// Last 24 hours.
    #[default]
    Last24Hours,
    /// Last seven days.
    Last7Days,
}

impl TimeRange {
    /// All selectable ranges, in display order.
    pub const ALL: [TimeRange; 3] = [
        TimeRange::LastHour,
        TimeRange::Last24Hours,
        TimeRange::Last7Days,
    ];

    /// Query-string token understood by the API (`?timeRange=...`).
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::LastHour => "1h",
            Self::Last24Hours => "24h",
            Self::Last7Days => "7d",
        }
    }

    /// Human-readable label for the range selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LastHour => "Last 1 Hour",
            Self::Last24Hours => "Last 24 Hours",
            Self::Last7Days => "Last 7 Days",
        }
    }

    /// Parse a query-string token back into a range (select elements
    /// round-trip through string values).
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "1h" => Some(Self::LastHour),
            "24h" => Some(Self::Last24Hours),
            "7d" => Some(Self::Last7Days),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_filter_queries_are_distinct() {
        let mut tokens: Vec<_> = TimeFilter::ALL.iter().map(|f| f.as_query()).collect();
        tokens.sort();
        tokens.dedup();
        assert_eq!(tokens.len(), TimeFilter::ALL.len());
    }

    #[test]
    fn test_time_filter_default_is_all() {
        assert_eq!(TimeFilter::default(), TimeFilter::All);
        assert_eq!(TimeFilter::default().as_query(), "all");
    }

    #[test]
    fn test_time_range_round_trip() {
        for range in TimeRange::ALL {
            assert_eq!(TimeRange::from_query(range.as_query()), Some(range));
        }
        assert_eq!(TimeRange::from_query("never"), None);
    }

    #[test]
    fn test_time_range_default() {
        assert_eq!(TimeRange::default(), TimeRange::Last24Hours);
    }
}
