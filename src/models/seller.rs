//! Seller data shapes as returned by the admin API.

use serde::{Deserialize, Serialize};

/// A seller account as it appears in the sellers list and on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    /// ISO-8601 registration timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Seller {
    /// Case-insensitive match against name, email, or shop name.
    ///
    /// Used by the sellers list search box; an empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self
                .shop_name
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&term))
    }

    /// Short identifier suffix for display (last six characters).
    pub fn short_id(&self) -> &str {
        let n = self.id.len().saturating_sub(6);
        &self.id[n..]
    }
}

/// Full seller profile shown on the details page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerDetails {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub shop_address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub gst_number: Option<String>,
    /// Name of the subscription plan currently assigned, if any.
    #[serde(default)]
    pub current_plan_id: Option<String>,
    #[serde(default)]
    pub last_activity_date: Option<String>,
    #[serde(default)]
    pub profile_completed: bool,
}
