use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response of the wcms register-login plugin.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct RegisterLoginResponse {
    #[serde(rename = "Code")]
    code: i64,
    #[serde(rename = "Result")]
    result: bool,
}

impl SerdeJSONBodyHTTPResponseType for RegisterLoginResponse {}

impl RegisterLoginResponse {
    pub fn code(&self) -> i64 { self.code }
    pub fn is_success(&self) -> bool { self.result }
}
