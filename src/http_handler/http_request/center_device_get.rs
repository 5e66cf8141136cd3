use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, Params, random_param};
use crate::http_handler::common::HTTPRequestMethod;
use super::center_device::CenterDevicesResponse;
use crate::http_handler::session::Session;

/// Lists every device visible to the logged-in user.
#[derive(Debug, Default)]
pub struct CenterDevicesRequest {}

impl NoBodyHTTPRequestType for CenterDevicesRequest {}

impl HTTPRequestType for CenterDevicesRequest {
    type Response = CenterDevicesResponse;
    fn service(&self) -> &'static str { "addrdata" }
    fn endpoint(&self) -> &'static str { "/center/device" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self, session: &Session) -> Params {
        vec![("key", session.key().to_owned()), ("random", random_param())]
    }
}
