use std::collections::HashMap;
use url::Url;

/// Per-host memory of the last `Set-Cookie` values a host sent.
///
/// Services set their own session cookies, so cookies are kept per request
/// host (with port) rather than per service name. A new response from a host
/// replaces whatever was stored for it; there is no merging and no expiry.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    entries: HashMap<String, Vec<String>>,
}

impl CookieStore {
    /// Replaces the stored values for `host`.
    pub fn record(&mut self, host: &str, values: Vec<String>) {
        self.entries.insert(host.to_owned(), values);
    }

    /// Values to replay on the next request to `host`, in the order received.
    pub fn attach(&self, host: &str) -> &[String] {
        self.entries.get(host).map(Vec::as_slice).unwrap_or_default()
    }

    /// The key a request to `url` is stored under: host and port, with the
    /// scheme's default port filled in when the URL omits it.
    pub fn host_key(url: &Url) -> String {
        let host = url.host_str().unwrap_or_default();
        match url.port_or_known_default() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_owned(),
        }
    }
}
