use crate::shared::list_state::endpoint::encode_request;
use crate::shared::list_state::fetch::FetchError;
use crate::shared::list_state::ListEndpoint;
use contracts::shared::list_query::ListQuery;
use contracts::system::users::{User, UsersListRequest};

/// `GET /api/users?name=&limit=&offset=&order_by=&order_dir=`
pub struct UsersEndpoint;

impl ListEndpoint for UsersEndpoint {
    type Row = User;
    const PATH: &'static str = "/api/users";

    fn query_string(query: &ListQuery) -> Result<String, FetchError> {
        encode_request(&UsersListRequest::from(query))
    }
}
