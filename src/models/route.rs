//! Hash-based routing for the admin console.

/// Application routes for hash-based navigation.
/// URL format: `#/section` or `#/sellers/<id>` for the details page.
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    /// Login screen: #/login
    Login,
    /// Dashboard overview: #/ or empty hash
    Dashboard,
    /// Sellers list: #/sellers
    Sellers,
    /// Single seller details: #/sellers/<id>
    Seller {
        /// Server-assigned seller identifier.
        id: String,
    },
    /// Subscription plans: #/plans
    Plans,
    /// Financial analytics: #/financial
    Financial,
    /// System status: #/system
    System,
}

impl Route {
    /// Parse URL hash into Route. Unknown paths fall back to the dashboard.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let path = path.trim_end_matches('/');

        match path {
            "" => Self::Dashboard,
            "login" => Self::Login,
            "sellers" => Self::Sellers,
            "plans" => Self::Plans,
            "financial" => Self::Financial,
            "system" => Self::System,
            other => match other.strip_prefix("sellers/") {
                Some(id) if !id.is_empty() => Self::Seller { id: id.to_string() },
                _ => Self::Dashboard,
            },
        }
    }

    /// Convert Route to URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Dashboard => "#/".to_string(),
            Self::Login => "#/login".to_string(),
            Self::Sellers => "#/sellers".to_string(),
            Self::Seller { id } => format!("#/sellers/{}", id),
            Self::Plans => "#/plans".to_string(),
            Self::Financial => "#/financial".to_string(),
            Self::System => "#/system".to_string(),
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Update browser URL to match this route (adds a history entry).
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let hash = self.to_hash();
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&hash));
        }
    }

    /// Sidebar label for this route, if it appears in the navigation.
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("Dashboard"),
            Self::Sellers => Some("Sellers"),
            Self::Plans => Some("Plans"),
            Self::Financial => Some("Financial"),
            Self::System => Some("System Status"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Dashboard);
        assert_eq!(Route::from_hash("#"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/login"), Route::Login);
        assert_eq!(Route::from_hash("#/sellers"), Route::Sellers);
        assert_eq!(
            Route::from_hash("#/sellers/66f1a2b3"),
            Route::Seller {
                id: "66f1a2b3".to_string(),
            }
        );
        assert_eq!(Route::from_hash("#/plans"), Route::Plans);
        assert_eq!(Route::from_hash("#/financial"), Route::Financial);
        assert_eq!(Route::from_hash("#/system"), Route::System);
        // Unknown paths fall back to the dashboard
        assert_eq!(Route::from_hash("#/nope"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/sellers/"), Route::Sellers);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::Dashboard.to_hash(), "#/");
        assert_eq!(Route::Login.to_hash(), "#/login");
        assert_eq!(
            Route::Seller {
                id: "abc123".to_string(),
            }
            .to_hash(),
            "#/sellers/abc123"
        );
    }

    #[test]
    fn test_round_trip() {
        for route in [
            Route::Dashboard,
            Route::Login,
            Route::Sellers,
            Route::Seller { id: "x1".into() },
            Route::Plans,
            Route::Financial,
            Route::System,
        ] {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }
}
