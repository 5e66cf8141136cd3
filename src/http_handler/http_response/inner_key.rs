use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response of the webclient key endpoint: `{"data": {"key": "..."}}`.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct InnerKeyResponse {
    data: Option<InnerKeyData>,
}

#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
struct InnerKeyData {
    key: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for InnerKeyResponse {}

impl InnerKeyResponse {
    /// The key exactly as sent, still percent-escaped.
    pub fn key(&self) -> Option<&str> { self.data.as_ref()?.key.as_deref() }
}
