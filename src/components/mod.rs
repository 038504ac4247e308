//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Authenticated shell: sidebar, header, routed content
//! - [`login`] - Login screen
//! - [`hooks`] - Cache-backed data-fetching hook shared by all pages
//! - [`dashboard`] - Platform overview page
//! - [`sellers`] / [`seller_details`] - Seller browsing pages
//! - [`plans`] - Subscription plan management page
//! - [`financial`] - Revenue analytics page
//! - [`system_status`] / [`request_traffic`] - Backend health pages

pub mod dashboard;
pub mod financial;
pub mod hooks;
pub mod layout;
pub mod login;
pub mod plans;
pub mod request_traffic;
pub mod router;
pub mod seller_details;
pub mod sellers;
pub mod system_status;

pub use router::AppRouter;
