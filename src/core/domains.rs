//! Typed fetchers and mutations for each data domain.
//!
//! Thin wrappers over the API gateway that know each endpoint's path,
//! query parameters, and which envelope field carries the payload. The
//! page hooks hand these futures to the orchestrator; the payload shapes
//! they return are exactly what lands in the persistent store.

use web_sys::AbortSignal;

use crate::core::api;
use crate::core::error::ApiError;
use crate::models::{
    DashboardData, FinancialData, Plan, PlanForm, RequestStats, Seller, SellerDetails, SystemInfo,
    TimeFilter, TimeRange,
};

/// `GET /admin/dashboard?timeFilter=...` - the whole body is the payload.
pub async fn fetch_dashboard(
    filter: TimeFilter,
    signal: Option<&AbortSignal>,
) -> Result<DashboardData, ApiError> {
    let path = format!("/admin/dashboard?timeFilter={}", filter.as_query());
    let body = api::get(&path, signal).await?;
    api::decode(body)
}

/// `GET /admin/system-status` - payload under `system`.
pub async fn fetch_system_status(signal: Option<&AbortSignal>) -> Result<SystemInfo, ApiError> {
    let body = api::get("/admin/system-status", signal).await?;
    api::extract(body, "system")
}

/// `GET /admin/sellers` - payload under `sellers`.
pub async fn fetch_sellers(signal: Option<&AbortSignal>) -> Result<Vec<Seller>, ApiError> {
    let body = api::get("/admin/sellers", signal).await?;
    api::extract(body, "sellers")
}

/// `GET /admin/sellers/{id}` - payload under `seller`.
pub async fn fetch_seller(
    id: &str,
    signal: Option<&AbortSignal>,
) -> Result<SellerDetails, ApiError> {
    let body = api::get(&format!("/admin/sellers/{}", id), signal).await?;
    api::extract(body, "seller")
}

/// `GET /admin/plans` - payload under `plans`.
pub async fn fetch_plans(signal: Option<&AbortSignal>) -> Result<Vec<Plan>, ApiError> {
    let body = api::get("/admin/plans", signal).await?;
    api::extract(body, "plans")
}

/// `GET /admin/financial?timeFilter=...` - payload under `financial`.
pub async fn fetch_financial(
    filter: TimeFilter,
    signal: Option<&AbortSignal>,
) -> Result<FinancialData, ApiError> {
    let path = format!("/admin/financial?timeFilter={}", filter.as_query());
    let body = api::get(&path, signal).await?;
    api::extract(body, "financial")
}

/// `GET /admin/requests?timeRange=...` - the whole body is the payload.
pub async fn fetch_request_stats(
    range: TimeRange,
    signal: Option<&AbortSignal>,
) -> Result<RequestStats, ApiError> {
    let path = format!("/admin/requests?timeRange={}", range.as_query());
    let body = api::get(&path, signal).await?;
    api::decode(body)
}

/// `POST /admin/plans`. The caller must force-refresh the plans list.
pub async fn create_plan(form: &PlanForm) -> Result<(), ApiError> {
    api::post("/admin/plans", form).await.map(|_| ())
}

/// `PUT /admin/plans/{id}`. The caller must force-refresh the plans list.
pub async fn update_plan(id: &str, form: &PlanForm) -> Result<(), ApiError> {
    api::put(&format!("/admin/plans/{}", id), form)
        .await
        .map(|_| ())
}

/// `DELETE /admin/plans/{id}`. The caller must force-refresh the plans list.
pub async fn delete_plan(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/admin/plans/{}", id))
        .await
        .map(|_| ())
}
