//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the layout header.
pub const APP_NAME: &str = "Admin Console";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the admin REST API. All request paths are appended to this.
pub const API_BASE_URL: &str = "/api";

// =============================================================================
// Auth Configuration
// =============================================================================

/// localStorage key for the admin bearer token.
pub const TOKEN_KEY: &str = "admin_token";

/// localStorage key for the logged-in admin profile (JSON).
pub const ADMIN_USER_KEY: &str = "admin_user";

// =============================================================================
// Cache Configuration
// =============================================================================

/// Persistent cache (IndexedDB) configuration.
///
/// The schema version is forward-only: bumping it recreates the object
/// store and previously cached payloads simply become inaccessible.
pub mod cache {
    /// IndexedDB database name.
    pub const DB_NAME: &str = "admin_console";

    /// IndexedDB schema version.
    pub const DB_VERSION: u32 = 1;

    /// Object store holding cached API payloads, keyed by cache key.
    pub const STORE_NAME: &str = "api_cache";
}
