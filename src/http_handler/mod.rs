pub use serde;
pub use reqwest;
pub use chrono;

pub mod common;
pub mod cookie_store;
pub mod http_client;
pub mod http_handler_common;
pub mod http_request;
pub mod http_response;
pub mod service_directory;
pub mod session;

#[cfg(test)]
pub(crate) mod test_util;
