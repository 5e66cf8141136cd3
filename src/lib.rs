//! Client for the Angeltrax fleet-telematics platform.
//!
//! The platform is reached through a single entry-point host whose balance
//! server announces where each backend service ("webclient", "wcms",
//! "addrdata", ...) lives. A [`Session`] holds that service directory,
//! the per-host cookies the services set and the session key, and routes
//! every request to the right host.
#![allow(clippy::module_name_repetitions, clippy::upper_case_acronyms)]

pub mod config;
pub mod http_handler;

pub use http_handler::common::{DecodeError, HTTPError, HTTPRequestMethod, RequestBody, TransportError};
pub use http_handler::http_client::{HTTPClient, HTTPClientConfig};
pub use http_handler::http_request::request_common::{
    FormBodyHTTPRequestType, HTTPRequestType, NoBodyHTTPRequestType,
};
pub use http_handler::service_directory::{ServiceDescriptor, ServiceDirectory, ServiceEndpoint};
pub use http_handler::session::Session;
pub use tokio_util::sync::CancellationToken;
