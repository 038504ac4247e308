//! Cache keys identifying one fetchable, cacheable dataset variant.
//!
//! Two requests that would return semantically different data (different
//! filter, time range, or id) must map to different keys; two requests for
//! the same variant must map to the same key. The smart constructors below
//! are the only way to build a key, which keeps that invariant in one place.

use std::fmt;

use crate::models::{TimeFilter, TimeRange};

/// String key for one logical dataset instance in both cache tiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Dashboard statistics for one time filter.
    pub fn dashboard(filter: TimeFilter) -> Self {
        Self(format!("dashboard_{}", filter.as_query()))
    }

    /// System snapshot cached by the dashboard page.
    ///
    /// Distinct from [`CacheKey::system_status`]: the dashboard refreshes
    /// its snapshot together with its stats and must not invalidate the
    /// full system page (and vice versa).
    pub fn system_status_dashboard() -> Self {
        Self("system_status_dashboard".to_string())
    }

    /// Full system status page data.
    pub fn system_status() -> Self {
        Self("system_status".to_string())
    }

    /// Complete sellers list.
    pub fn sellers_list() -> Self {
        Self("sellers_list".to_string())
    }

    /// One seller's full profile.
    pub fn seller(id: &str) -> Self {
        Self(format!("seller_{}", id))
    }

    /// Complete plans list.
    pub fn plans_list() -> Self {
        Self("plans_list".to_string())
    }

    /// Financial analytics for one time filter.
    pub fn financial(filter: TimeFilter) -> Self {
        Self(format!("financial_{}", filter.as_query()))
    }

    /// Request-traffic statistics for one time range.
    pub fn request_stats(range: TimeRange) -> Self {
        Self(format!("request_stats_{}", range.as_query()))
    }

    /// The raw string used as the IndexedDB key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_variant_same_key() {
        assert_eq!(
            CacheKey::dashboard(TimeFilter::Today),
            CacheKey::dashboard(TimeFilter::Today)
        );
        assert_eq!(CacheKey::seller("abc"), CacheKey::seller("abc"));
    }

    #[test]
    fn test_different_variants_different_keys() {
        assert_ne!(
            CacheKey::dashboard(TimeFilter::Today),
            CacheKey::dashboard(TimeFilter::All)
        );
        assert_ne!(CacheKey::seller("a"), CacheKey::seller("b"));
        assert_ne!(
            CacheKey::financial(TimeFilter::Today),
            CacheKey::dashboard(TimeFilter::Today)
        );
        assert_ne!(
            CacheKey::system_status(),
            CacheKey::system_status_dashboard()
        );
    }

    #[test]
    fn test_wire_format() {
        assert_eq!(CacheKey::dashboard(TimeFilter::Last7Days).as_str(), "dashboard_7days");
        assert_eq!(
            CacheKey::request_stats(TimeRange::Last24Hours).as_str(),
            "request_stats_24h"
        );
        assert_eq!(CacheKey::seller("66f1").as_str(), "seller_66f1");
        assert_eq!(CacheKey::plans_list().as_str(), "plans_list");
    }
}
