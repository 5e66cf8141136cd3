use crate::http_handler::common::DecodeError;

/// A type a raw response body can be turned into.
pub trait HTTPResponseType: Sized {
    /// Decodes a successful response body.
    ///
    /// # Errors
    /// [`DecodeError`] if the body does not have the expected shape.
    fn read_response(body: &[u8]) -> Result<Self, DecodeError>;
}

/// Marker for responses decoded by a plain serde JSON decode.
pub trait SerdeJSONBodyHTTPResponseType {}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    fn read_response(body: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(body).map_err(DecodeError::Body)
    }
}

