//! Dashboard statistics payloads.

use serde::{Deserialize, Serialize};

use super::Seller;

/// Aggregate counters shown in the dashboard stat cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_sellers: u64,
    #[serde(default)]
    pub active_sellers: u64,
    #[serde(default)]
    pub new_registrations: u64,
}

/// Full payload of `GET /admin/dashboard?timeFilter=...`.
///
/// Cached verbatim under `dashboard_<filter>`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub stats: DashboardStats,
    #[serde(default)]
    pub recent_sellers: Vec<Seller>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_format() {
        let data: DashboardData = serde_json::from_value(serde_json::json!({
            "stats": {
                "totalSellers": 120,
                "activeSellers": 88,
                "newRegistrations": 7
            },
            "recentSellers": [{
                "_id": "s1",
                "name": "New Shop",
                "email": "new@example.com"
            }]
        }))
        .expect("dashboard data should deserialize");
        assert_eq!(data.stats.total_sellers, 120);
        assert_eq!(data.recent_sellers.len(), 1);
    }

    #[test]
    fn test_empty_payload_defaults() {
        let data: DashboardData =
            serde_json::from_value(serde_json::json!({})).expect("empty object should deserialize");
        assert_eq!(data.stats.new_registrations, 0);
        assert!(data.recent_sellers.is_empty());
    }
}
