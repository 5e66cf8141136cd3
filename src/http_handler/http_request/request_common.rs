use crate::http_handler::common::{HTTPError, HTTPRequestMethod, RequestBody};
use crate::http_handler::http_response::response_common::HTTPResponseType;
use crate::http_handler::session::Session;

/// Query or form parameters of a request, in the order they are encoded.
pub type Params = Vec<(&'static str, String)>;

/// Rows requested from paginated wcms listings.
pub const DEFAULT_ROW_COUNT: usize = 100;

/// An endpoint of one of the platform's discovered services.
pub trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// Name of the service in the session's directory.
    fn service(&self) -> &'static str;
    /// Path below the service's base URL.
    fn endpoint(&self) -> &'static str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Query parameters; may read the session key.
    fn query_params(&self, _session: &Session) -> Params { Params::new() }
}

/// Requests that carry their parameters in the URL only.
#[allow(async_fn_in_trait)]
pub trait NoBodyHTTPRequestType: HTTPRequestType {
    /// Dispatches the request through `session` and decodes the response.
    ///
    /// # Errors
    /// Any [`HTTPError`] raised by the dispatch or the response decoding.
    async fn send_request(&self, session: &mut Session) -> Result<Self::Response, HTTPError> {
        let query = self.query_params(session);
        let body = session
            .dispatch(self.service(), self.request_method(), self.endpoint(), query, RequestBody::Empty)
            .await?;
        Ok(Self::Response::read_response(&body)?)
    }
}

/// Requests that send a form-encoded body.
#[allow(async_fn_in_trait)]
pub trait FormBodyHTTPRequestType: HTTPRequestType {
    /// Fields of the form, encoded in order.
    fn form_params(&self, session: &Session) -> Params;

    /// Dispatches the request through `session` and decodes the response.
    ///
    /// # Errors
    /// Any [`HTTPError`] raised by the dispatch or the response decoding.
    async fn send_request(&self, session: &mut Session) -> Result<Self::Response, HTTPError> {
        let query = self.query_params(session);
        let form = RequestBody::form(self.form_params(session));
        let body = session
            .dispatch(self.service(), self.request_method(), self.endpoint(), query, form)
            .await?;
        Ok(Self::Response::read_response(&body)?)
    }
}

/// Cache-busting value the addrdata service expects with every query.
pub(crate) fn random_param() -> String { chrono::Utc::now().timestamp().to_string() }
