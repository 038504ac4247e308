//! Subscription plan data shapes.

use serde::{Deserialize, Serialize};

/// Feature modules that a plan can unlock for a seller.
pub const AVAILABLE_MODULES: &[&str] = &[
    "Customers",
    "Products",
    "Orders",
    "Billing",
    "Staff",
    "Analytics",
    "Inventory",
    "Reports",
];

/// A subscription plan as returned by `GET /admin/plans`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub duration_days: u32,
    #[serde(default)]
    pub plan_type: String,
    #[serde(default)]
    pub max_customers: u32,
    #[serde(default)]
    pub max_products: u32,
    #[serde(default)]
    pub max_orders: u32,
    #[serde(default)]
    pub unlocked_modules: Vec<String>,
    #[serde(default)]
    pub locked_modules: Vec<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Form payload for creating or updating a plan.
///
/// Sent as the JSON body of `POST /admin/plans` and `PUT /admin/plans/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration_days: u32,
    pub plan_type: String,
    pub max_customers: u32,
    pub max_products: u32,
    pub max_orders: u32,
    pub unlocked_modules: Vec<String>,
    pub locked_modules: Vec<String>,
    pub is_active: bool,
}

impl Default for PlanForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: 0.0,
            duration_days: 30,
            plan_type: "standard".to_string(),
            max_customers: 0,
            max_products: 0,
            max_orders: 0,
            unlocked_modules: Vec::new(),
            locked_modules: Vec::new(),
            is_active: true,
        }
    }
}

impl From<&Plan> for PlanForm {
    fn from(plan: &Plan) -> Self {
        Self {
            name: plan.name.clone(),
            description: plan.description.clone(),
            price: plan.price,
            duration_days: plan.duration_days,
            plan_type: plan.plan_type.clone(),
            max_customers: plan.max_customers,
            max_products: plan.max_products,
            max_orders: plan.max_orders,
            unlocked_modules: plan.unlocked_modules.clone(),
            locked_modules: plan.locked_modules.clone(),
            is_active: plan.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_format() {
        let plan: Plan = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "name": "Growth",
            "description": "For growing shops",
            "price": 499.0,
            "durationDays": 30,
            "planType": "standard",
            "maxCustomers": 500,
            "maxProducts": 1000,
            "maxOrders": 2000,
            "unlockedModules": ["Customers", "Products"],
            "lockedModules": ["Analytics"],
            "isActive": true
        }))
        .expect("plan should deserialize");
        assert_eq!(plan.duration_days, 30);
        assert_eq!(plan.unlocked_modules.len(), 2);
    }

    #[test]
    fn test_default_form() {
        let form = PlanForm::default();
        assert_eq!(form.duration_days, 30);
        assert_eq!(form.plan_type, "standard");
        assert!(form.is_active);
    }

    #[test]
    fn test_form_from_plan_round_trips_fields() {
        let plan: Plan = serde_json::from_value(serde_json::json!({
            "_id": "p2",
            "name": "Basic",
            "price": 99.5,
            "durationDays": 90,
            "isActive": false
        }))
        .expect("plan should deserialize");
        let form = PlanForm::from(&plan);
        assert_eq!(form.name, "Basic");
        assert_eq!(form.price, 99.5);
        assert_eq!(form.duration_days, 90);
        assert!(!form.is_active);
    }
}
