//! Core domain logic: API gateway, auth session, and the cache subsystem.

pub mod api;
pub mod auth;
pub mod cache;
pub mod domains;
pub mod error;
