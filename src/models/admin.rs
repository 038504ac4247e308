//! Admin operator profile, as returned by the login endpoint.

use serde::{Deserialize, Serialize};

/// The authenticated super-admin. Persisted in localStorage alongside the
/// bearer token so the layout can greet the operator after a reload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_format() {
        let admin: AdminUser = serde_json::from_value(serde_json::json!({
            "_id": "a1",
            "name": "Root",
            "email": "root@example.com"
        }))
        .expect("admin should deserialize");
        assert_eq!(admin.name, "Root");
    }
}
