//! Wire types for the platform's JSON payloads.
//!
//! The backend serializes field names in camelCase and pairs as
//! `{first, second}` objects.

use std::collections::HashMap;

use serde::Deserialize;

/// Generic two-field pair as the backend emits it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

/// One business in the home-page listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSummary {
    pub id: u64,
    pub business_name: String,
    #[serde(default)]
    pub business_explain: String,
    pub delivery_price: f64,
}

/// One dish on a business's menu.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: u64,
    pub food_name: String,
    #[serde(default)]
    pub food_explain: String,
    pub food_price: f64,
}

/// One historical order: business, totals, and a food breakdown keyed by
/// food id, each entry holding `(name, (quantity, price))`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderList {
    pub business_name: String,
    pub total_price: String,
    pub delivery_price: f64,
    #[serde(default)]
    pub food_list: HashMap<u64, Pair<String, Pair<u32, f64>>>,
}

/// Order history split into paid and unpaid lists.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllOrderList {
    pub paid_list: Vec<OrderList>,
    pub unpaid_list: Vec<OrderList>,
}
