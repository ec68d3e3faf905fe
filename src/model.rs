use serde::{Deserialize, Serialize};

/// A recommended dish. Produced by the recommendation stage and immutable
/// afterwards; selection refers to dishes by `id` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Resolved locally by the image catalog, not returned by the service.
    #[serde(default)]
    pub image: String,
    /// Free-text approximation, e.g. "300大卡".
    pub calories: String,
}

/// One weekday entry of the generated plan. The planning stage produces
/// exactly five of these as a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    pub day: String,
    pub main_dish: String,
    pub side_dish: String,
    pub reason: String,
}

/// A shopping-list section. Category labels are free text from the service,
/// so duplicates across categories are possible and left as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingCategory {
    pub category: String,
    pub items: Vec<String>,
}

/// Role of a dish within a day's dinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DishType {
    Main,
    Side,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub dish_name: String,
    #[serde(rename = "type")]
    pub dish_type: DishType,
    pub ingredients: Vec<String>,
    /// Ordered; sequence matters.
    pub steps: Vec<String>,
    pub tips: String,
}

/// Combined output of the details stage. The service may omit either array;
/// an empty list is a valid (if degraded) outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDetails {
    #[serde(default)]
    pub shopping_list: Vec<ShoppingCategory>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}
