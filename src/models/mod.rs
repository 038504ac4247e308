//! Typed data shapes shared across the application.

mod admin;
mod dashboard;
mod filters;
mod financial;
mod plan;
mod requests;
mod route;
mod seller;
mod system;

pub use admin::AdminUser;
pub use dashboard::DashboardData;
pub use filters::{TimeFilter, TimeRange};
pub use financial::FinancialData;
pub use plan::{AVAILABLE_MODULES, Plan, PlanForm};
pub use requests::RequestStats;
pub use route::Route;
pub use seller::{Seller, SellerDetails};
pub use system::SystemInfo;
