use serde::{Deserialize, Serialize};

use crate::shared::list_query::{ListQuery, SortOrder};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Query parameters of the users list.
///
/// The users endpoint names its parameters differently from the orders
/// endpoint: `sort` travels as `order_by`, `order` as `order_dir` and the
/// free-text search filters on `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub limit: u32,
    pub offset: u32,
    pub order_by: String,
    pub order_dir: SortOrder,
}

impl From<&ListQuery> for UsersListRequest {
    fn from(query: &ListQuery) -> Self {
        Self {
            name: (!query.search.is_empty()).then(|| query.search.clone()),
            limit: query.limit,
            offset: query.offset,
            order_by: query.sort.clone(),
            order_dir: query.order,
        }
    }
}
