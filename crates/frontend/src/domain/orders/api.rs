use crate::shared::list_state::endpoint::encode_request;
use crate::shared::list_state::fetch::FetchError;
use crate::shared::list_state::ListEndpoint;
use contracts::domain::orders::{Order, OrdersListRequest};
use contracts::shared::list_query::ListQuery;

/// `GET /api/orders?search=&limit=&offset=&sort=&order=`
pub struct OrdersEndpoint;

impl ListEndpoint for OrdersEndpoint {
    type Row = Order;
    const PATH: &'static str = "/api/orders";

    fn query_string(query: &ListQuery) -> Result<String, FetchError> {
        encode_request(&OrdersListRequest::from(query))
    }
}
