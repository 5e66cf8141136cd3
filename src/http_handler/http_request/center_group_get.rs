use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, Params, random_param};
use crate::http_handler::common::HTTPRequestMethod;
use super::center_group::CenterGroupsResponse;
use crate::http_handler::session::Session;

/// Lists the device group tree.
#[derive(Debug, Default)]
pub struct CenterGroupsRequest {}

impl NoBodyHTTPRequestType for CenterGroupsRequest {}

impl HTTPRequestType for CenterGroupsRequest {
    type Response = CenterGroupsResponse;
    fn service(&self) -> &'static str { "addrdata" }
    fn endpoint(&self) -> &'static str { "/center/group" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self, session: &Session) -> Params {
        vec![("key", session.key().to_owned()), ("random", random_param())]
    }
}
