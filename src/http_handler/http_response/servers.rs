use super::response_common::HTTPResponseType;
use crate::http_handler::common::DecodeError;
use crate::http_handler::service_directory::{ServiceDescriptor, ServiceDirectory};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Response of the balance server's discovery call.
///
/// The server mixes a handful of fixed fields with one top level object per
/// service, keyed by the service name. Every key that is not a fixed field
/// must therefore decode as a [`ServiceDescriptor`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryResult {
    client_path: String,
    license_timeout: String,
    license_timeout_tip: i64,
    server_date: String,
    support: Vec<String>,
    upgrade: i64,
    version: String,
    services: HashMap<String, ServiceDescriptor>,
}

impl DiscoveryResult {
    /// Decodes a discovery body.
    ///
    /// The body is first read as an open map of raw values; each key is then
    /// decoded either into its fixed field or as a service. A `null` value
    /// stands for the zero value. The first key that fails aborts the whole
    /// decode.
    ///
    /// # Errors
    /// [`DecodeError::Envelope`] if the body is not a JSON object,
    /// [`DecodeError::Field`] or [`DecodeError::Service`] naming the
    /// offending key otherwise.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        let raw: Map<String, Value> = serde_json::from_slice(body).map_err(DecodeError::Envelope)?;
        let mut result = DiscoveryResult::default();
        for (key, value) in raw {
            match key.as_str() {
                // Vendor spelling.
                "clienpath" => result.client_path = field(&key, value)?,
                "licensetimeout" => result.license_timeout = field(&key, value)?,
                "licensetimeouttip" => result.license_timeout_tip = field(&key, value)?,
                "serverdate" => result.server_date = field(&key, value)?,
                "support" => result.support = field(&key, value)?,
                "upgrade" => result.upgrade = field(&key, value)?,
                "version" => result.version = field(&key, value)?,
                _ => {
                    let descriptor = if value.is_null() {
                        ServiceDescriptor::default()
                    } else {
                        serde_json::from_value(value)
                            .map_err(|source| DecodeError::Service { key: key.clone(), source })?
                    };
                    result.services.insert(key, descriptor);
                }
            }
        }
        Ok(result)
    }

    pub fn client_path(&self) -> &str { &self.client_path }
    pub fn license_timeout(&self) -> &str { &self.license_timeout }
    pub fn license_timeout_tip(&self) -> i64 { self.license_timeout_tip }
    pub fn server_date(&self) -> &str { &self.server_date }
    pub fn support(&self) -> &[String] { &self.support }
    pub fn upgrade(&self) -> i64 { self.upgrade }
    pub fn version(&self) -> &str { &self.version }
    pub fn services(&self) -> &HashMap<String, ServiceDescriptor> { &self.services }

    /// Consumes the result, keeping only the service table.
    pub fn into_directory(self) -> ServiceDirectory { ServiceDirectory::new(self.services) }
}

impl HTTPResponseType for DiscoveryResult {
    fn read_response(body: &[u8]) -> Result<Self, DecodeError> { Self::decode(body) }
}

fn field<T: DeserializeOwned + Default>(key: &str, value: Value) -> Result<T, DecodeError> {
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(|source| DecodeError::Field { key: key.to_owned(), source })
}
