//! Request-traffic payloads (`GET /admin/requests?timeRange=...`).

use serde::{Deserialize, Serialize};

/// One time bucket of the traffic histogram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficBucket {
    /// Axis label for the bucket (e.g. `"14:00"`).
    pub label: String,
    /// Number of requests that landed in this bucket.
    pub count: u64,
    /// Number of failed requests in this bucket.
    #[serde(default)]
    pub errors: u64,
    /// Mean request duration in milliseconds.
    #[serde(default)]
    pub avg_duration: f64,
}

/// Aggregate counters for the selected range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSummary {
    #[serde(default)]
    pub total_requests: u64,
}

/// Full payload of the traffic endpoint, cached verbatim under
/// `request_stats_<range>`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestStats {
    #[serde(default)]
    pub summary: TrafficSummary,
    #[serde(default)]
    pub data: Vec<TrafficBucket>,
}

impl RequestStats {
    /// Largest bucket count, floored at 1 so bar heights never divide by zero.
    pub fn max_count(&self) -> u64 {
        self.data.iter().map(|b| b.count).max().unwrap_or(0).max(1)
    }

    /// Request-weighted mean latency across all buckets, in milliseconds.
    pub fn avg_latency_ms(&self) -> u64 {
        let total_duration: f64 = self
            .data
            .iter()
            .map(|b| b.avg_duration * b.count as f64)
            .sum();
        let total = self.summary.total_requests.max(1);
        (total_duration / total as f64).round() as u64
    }
}
