use super::request_common::{FormBodyHTTPRequestType, HTTPRequestType, Params};
use crate::http_handler::common::HTTPRequestMethod;
use super::register_login::RegisterLoginResponse;
use crate::http_handler::session::Session;

/// Registers the session key with the wcms plugins.
///
/// wcms calls made before this one are rejected by the platform.
#[derive(Debug, Default)]
pub struct RegisterLoginRequest {}

impl FormBodyHTTPRequestType for RegisterLoginRequest {
    fn form_params(&self, session: &Session) -> Params {
        // The plugin expects the key escaped once more before form encoding.
        let token = url::form_urlencoded::byte_serialize(session.key().as_bytes()).collect();
        vec![
            ("UserName", String::new()),
            ("UserPassword", String::new()),
            ("Token", token),
            ("Page", "alarmcenter".to_owned()),
            ("AuthCode", String::new()),
            ("IsDES", "false".to_owned()),
        ]
    }
}

impl HTTPRequestType for RegisterLoginRequest {
    type Response = RegisterLoginResponse;
    fn service(&self) -> &'static str { "wcms" }
    fn endpoint(&self) -> &'static str { "/Plugin/RegisterLogin/default.ashx" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn query_params(&self, _session: &Session) -> Params {
        vec![
            ("Action", "Login".to_owned()),
            ("Type", "post".to_owned()),
            ("DataType", "Json".to_owned()),
            ("Guid", chrono::Utc::now().timestamp_millis().to_string()),
        ]
    }
}
