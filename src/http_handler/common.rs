use strum_macros::{Display, EnumString};

/// Content type attached to pre-encoded form bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The HTTP verbs the platform's services are called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Payload of a dispatched request.
///
/// A pre-encoded form string is sent verbatim with
/// [`FORM_CONTENT_TYPE`]. A structured value is serialized as JSON and sent
/// without a content type, which is what the vendor's services tolerate.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Form(String),
    Json(serde_json::Value),
}

impl RequestBody {
    /// Builds a form body from key/value pairs.
    pub fn form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in pairs {
            serializer.append_pair(key.as_ref(), value.as_ref());
        }
        RequestBody::Form(serializer.finish())
    }
}

/// Top level error of every operation against the platform.
#[derive(Debug, thiserror::Error)]
pub enum HTTPError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("no server info for service {0:?}")]
    UnknownService(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("http status {0}")]
    HTTPStatus(u16),
    #[error("authentication failed: {0}")]
    Authentication(String),
}

/// A response (or part of one) did not have the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("could not decode response into intermediate structure: {0}")]
    Envelope(#[source] serde_json::Error),
    #[error("could not decode key {key:?}: {source}")]
    Field {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not decode service {key:?}: {source}")]
    Service {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not decode response body: {0}")]
    Body(#[source] serde_json::Error),
}

impl DecodeError {
    /// The top level key that failed to decode, if the error concerns one.
    pub fn key(&self) -> Option<&str> {
        match self {
            DecodeError::Field { key, .. } | DecodeError::Service { key, .. } => Some(key),
            DecodeError::Envelope(_) | DecodeError::Body(_) => None,
        }
    }
}

/// The exchange itself failed before a status code could be judged.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("stored cookie for {0} is not a valid header value")]
    InvalidCookie(String),
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("request cancelled")]
    Cancelled,
}
