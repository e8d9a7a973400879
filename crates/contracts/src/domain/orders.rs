use serde::{Deserialize, Serialize};

use crate::shared::list_query::{ListQuery, SortOrder};

/// Customer of an order (the nested `user` object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub product_id: i64,
    pub title: String,
    #[serde(default)]
    pub sku: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_item_id: i64,
    pub qty: i64,
    pub unit_price: f64,
    pub product: ProductRef,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.qty as f64 * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub status: String,
    pub total: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    pub user: OrderCustomer,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Query parameters of `GET /orders`. Field names match the URL keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub limit: u32,
    pub offset: u32,
    pub sort: String,
    pub order: SortOrder,
}

impl From<&ListQuery> for OrdersListRequest {
    fn from(query: &ListQuery) -> Self {
        Self {
            search: (!query.search.is_empty()).then(|| query.search.clone()),
            limit: query.limit,
            offset: query.offset,
            sort: query.sort.clone(),
            order: query.order,
        }
    }
}
