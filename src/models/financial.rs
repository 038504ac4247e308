//! Financial analytics payloads.

use serde::{Deserialize, Serialize};

/// Revenue contributed by a single plan within the selected period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRevenue {
    pub plan_id: String,
    pub name: String,
    pub revenue: f64,
    pub count: u64,
}

/// Transaction count per subscription status (`active`, `expired`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    #[serde(rename = "_id")]
    pub status: String,
    pub count: u64,
}

/// Year/month bucket identifier for the monthly revenue series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthId {
    pub year: i32,
    pub month: u32,
}

/// One month of the revenue history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    #[serde(rename = "_id")]
    pub id: MonthId,
    pub revenue: f64,
    pub count: u64,
}

/// Payload of `GET /admin/financial?timeFilter=...` (the `financial` field
/// of the response envelope). Cached verbatim under `financial_<filter>`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub active_subscriptions: u64,
    #[serde(default)]
    pub revenue_by_plan: Vec<PlanRevenue>,
    #[serde(default)]
    pub subscription_status: Vec<StatusBreakdown>,
    #[serde(default)]
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

impl FinancialData {
    /// Share of total revenue contributed by `plan`, in percent.
    pub fn revenue_share(&self, plan: &PlanRevenue) -> f64 {
        if self.total_revenue > 0.0 {
            plan.revenue / self.total_revenue * 100.0
        } else {
            0.0
        }
    }
}
