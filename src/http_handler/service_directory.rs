use super::common::HTTPError;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Address a service reports when it lives on the same host as the entry point.
pub const WILDCARD_ADDRESS: &str = "0.0.0.0";

/// One named backend as announced by the discovery call.
///
/// Every service is reachable two ways, plain and secure; `use_secure`
/// decides which pair of address and port the client talks to.
///
/// Missing and `null` fields take their zero value. Ports outside `u16`
/// are rejected.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceDescriptor {
    #[serde(rename = "ip", deserialize_with = "null_as_default")]
    address: String,
    #[serde(deserialize_with = "null_as_default")]
    port: u16,
    #[serde(rename = "ips", deserialize_with = "null_as_default")]
    secure_address: String,
    #[serde(rename = "ports", deserialize_with = "null_as_default")]
    secure_port: u16,
    #[serde(deserialize_with = "null_as_default")]
    enable: i64,
    #[serde(rename = "usesecure", deserialize_with = "null_as_default")]
    use_secure: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ServiceDescriptor {
    /// A descriptor only reachable over plain HTTP.
    pub fn plain(address: &str, port: u16) -> Self {
        Self { address: address.to_owned(), port, enable: 1, ..Self::default() }
    }

    /// A descriptor that prefers its secure address pair.
    pub fn secure(address: &str, port: u16, secure_address: &str, secure_port: u16) -> Self {
        Self {
            address: address.to_owned(),
            port,
            secure_address: secure_address.to_owned(),
            secure_port,
            enable: 1,
            use_secure: 1,
        }
    }

    pub fn address(&self) -> &str { &self.address }
    pub fn port(&self) -> u16 { self.port }
    pub fn secure_address(&self) -> &str { &self.secure_address }
    pub fn secure_port(&self) -> u16 { self.secure_port }
    pub fn is_enabled(&self) -> bool { self.enable != 0 }
    pub fn uses_secure(&self) -> bool { self.use_secure != 0 }

    /// The address pair selected by the `use_secure` flag.
    pub fn endpoint(&self) -> ServiceEndpoint<'_> {
        if self.uses_secure() {
            ServiceEndpoint::Secure { address: &self.secure_address, port: self.secure_port }
        } else {
            ServiceEndpoint::Plain { address: &self.address, port: self.port }
        }
    }
}

/// The concrete address pair a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceEndpoint<'a> {
    Plain { address: &'a str, port: u16 },
    Secure { address: &'a str, port: u16 },
}

impl ServiceEndpoint<'_> {
    pub fn scheme(&self) -> &'static str {
        match self {
            ServiceEndpoint::Plain { .. } => "http",
            ServiceEndpoint::Secure { .. } => "https",
        }
    }

    /// Composes `scheme://host:port`, substituting `entry_point` for the
    /// wildcard address.
    pub fn base_url(&self, entry_point: &str) -> String {
        let (ServiceEndpoint::Plain { address, port } | ServiceEndpoint::Secure { address, port }) =
            *self;
        let host = if address == WILDCARD_ADDRESS { entry_point } else { address };
        format!("{}://{host}:{port}", self.scheme())
    }
}

/// Service name to descriptor table, fixed for the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDirectory {
    services: HashMap<String, ServiceDescriptor>,
}

impl ServiceDirectory {
    pub fn new(services: HashMap<String, ServiceDescriptor>) -> Self { Self { services } }

    pub fn get(&self, name: &str) -> Option<&ServiceDescriptor> { self.services.get(name) }

    pub fn names(&self) -> impl Iterator<Item = &str> { self.services.keys().map(String::as_str) }

    pub fn len(&self) -> usize { self.services.len() }

    pub fn is_empty(&self) -> bool { self.services.is_empty() }

    /// Resolves `name` to the base URL of the service.
    ///
    /// # Errors
    /// [`HTTPError::UnknownService`] if the directory has no such service.
    pub fn resolve(&self, name: &str, entry_point: &str) -> Result<String, HTTPError> {
        let descriptor =
            self.get(name).ok_or_else(|| HTTPError::UnknownService(name.to_owned()))?;
        Ok(descriptor.endpoint().base_url(entry_point))
    }
}

impl FromIterator<(String, ServiceDescriptor)> for ServiceDirectory {
    fn from_iter<T: IntoIterator<Item = (String, ServiceDescriptor)>>(iter: T) -> Self {
        Self { services: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> ServiceDirectory {
        [
            ("webclient".to_owned(), ServiceDescriptor::plain("192.168.1.20", 8088)),
            ("wcms".to_owned(), ServiceDescriptor::plain(WILDCARD_ADDRESS, 8080)),
            (
                "addrdata".to_owned(),
                ServiceDescriptor::secure("10.1.1.1", 8081, "fleet.example.com", 8443),
            ),
            (
                "media".to_owned(),
                ServiceDescriptor::secure("10.1.1.1", 8082, WILDCARD_ADDRESS, 9443),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn plain_service_uses_address_and_port() {
        let url = directory().resolve("webclient", "10.0.0.5").unwrap();
        assert_eq!(url, "http://192.168.1.20:8088");
    }

    #[test]
    fn secure_service_uses_secure_pair() {
        let url = directory().resolve("addrdata", "10.0.0.5").unwrap();
        assert_eq!(url, "https://fleet.example.com:8443");
    }

    #[test]
    fn wildcard_is_replaced_by_entry_point_for_both_variants() {
        let dir = directory();
        assert_eq!(dir.resolve("wcms", "10.0.0.5").unwrap(), "http://10.0.0.5:8080");
        assert_eq!(dir.resolve("media", "fleet.local").unwrap(), "https://fleet.local:9443");
    }

    #[test]
    fn any_nonzero_flag_selects_secure() {
        let descriptor: ServiceDescriptor = serde_json::from_value(serde_json::json!({
            "ip": "1.2.3.4", "port": 80, "ips": "5.6.7.8", "ports": 443, "enable": 1, "usesecure": 2
        }))
        .unwrap();
        assert_eq!(descriptor.endpoint(), ServiceEndpoint::Secure { address: "5.6.7.8", port: 443 });
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let descriptor: ServiceDescriptor =
            serde_json::from_value(serde_json::json!({"ip": "0.0.0.0", "port": 8080, "enable": 1}))
                .unwrap();
        assert!(!descriptor.uses_secure());
        assert!(descriptor.is_enabled());
        assert_eq!(descriptor.secure_port(), 0);
    }

    #[test]
    fn null_fields_default_to_zero() {
        let descriptor: ServiceDescriptor = serde_json::from_value(serde_json::json!({
            "ip": null, "port": null, "ips": null, "ports": null, "enable": null, "usesecure": null
        }))
        .unwrap();
        assert_eq!(descriptor, ServiceDescriptor::default());
    }

    #[test]
    fn unknown_service_is_reported_by_name() {
        let err = directory().resolve("nope", "10.0.0.5").unwrap_err();
        assert!(matches!(err, HTTPError::UnknownService(ref name) if name == "nope"));
    }
}
