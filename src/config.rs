//! REST client configuration.
//!
//! [`RestClientConfig`] is the bag of connection parameters the HTTP transport
//! consumes: where the API lives, which version to speak, the application key,
//! and optional proxy routing. A config is typically built once at startup and
//! handed to the transport; clone a template config to customize a variant
//! without touching the original.

use crate::{Error, Result};
use url::Url;

/// Header under which the transport sends the application key.
pub const API_KEY_HEADER: &str = "API-KEY";

/// The default `api_key`, which the server rejects.
///
/// Deployments must replace this with a real application key; this is a
/// manual configuration step, not something the config validates.
pub const PLACEHOLDER_API_KEY: &str = "ENTER_APPLICATION_KEY";

/// Connection parameters for the ProductLayer API.
///
/// All fields are public and independently settable; no cross-field
/// validation is performed (an out-of-range port or unreachable host is the
/// transport layer's problem to report). Requests are addressed as
/// `{api_schema}://{api_host}:{api_port}/{api_version}/...`, authenticated
/// with `api_key`, and optionally routed through `proxy_host:proxy_port`.
///
/// There is no internal synchronization: treat a shared config as immutable
/// after construction, and use [`Clone`] to hand out an isolated instance to
/// customize separately.
///
/// # Examples
///
/// ```
/// use productlayer::RestClientConfig;
///
/// let template = RestClientConfig::default().with_api_key("my-app-key");
///
/// // A clone shares no state with the template.
/// let staging = template.clone().with_api_host("api.staging.productlayer.com");
///
/// assert_eq!(template.api_host, "api.productlayer.com");
/// assert_eq!(staging.api_key, "my-app-key");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestClientConfig {
    /// URL schema, usually `https`.
    pub api_schema: String,

    /// API host name.
    pub api_host: String,

    /// API port.
    pub api_port: u16,

    /// API version path segment.
    pub api_version: String,

    /// Application key identifying the client.
    pub api_key: String,

    /// Whether requests are routed through the proxy.
    pub proxy_enabled: bool,

    /// Proxy host, used only when `proxy_enabled` is set.
    pub proxy_host: String,

    /// Proxy port, used only when `proxy_enabled` is set.
    pub proxy_port: u16,
}

impl Default for RestClientConfig {
    fn default() -> Self {
        Self {
            api_schema: "https".to_string(),
            api_host: "api.productlayer.com".to_string(),
            api_port: 80,
            api_version: "0.5".to_string(),
            api_key: PLACEHOLDER_API_KEY.to_string(),
            proxy_enabled: false,
            proxy_host: "localhost".to_string(),
            proxy_port: 8888,
        }
    }
}

impl RestClientConfig {
    /// Creates a fully specified configuration.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        api_schema: impl Into<String>,
        api_host: impl Into<String>,
        api_port: u16,
        api_version: impl Into<String>,
        api_key: impl Into<String>,
        proxy_enabled: bool,
        proxy_host: impl Into<String>,
        proxy_port: u16,
    ) -> Self {
        Self {
            api_schema: api_schema.into(),
            api_host: api_host.into(),
            api_port,
            api_version: api_version.into(),
            api_key: api_key.into(),
            proxy_enabled,
            proxy_host: proxy_host.into(),
            proxy_port,
        }
    }

    /// Sets the URL schema.
    #[must_use]
    pub fn with_api_schema(mut self, schema: impl Into<String>) -> Self {
        self.api_schema = schema.into();
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into();
        self
    }

    /// Sets the API port.
    #[must_use]
    pub fn with_api_port(mut self, port: u16) -> Self {
        self.api_port = port;
        self
    }

    /// Sets the API version path segment.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the application key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Enables proxy routing through the given host and port.
    #[must_use]
    pub fn with_proxy(mut self, host: impl Into<String>, port: u16) -> Self {
        self.proxy_enabled = true;
        self.proxy_host = host.into();
        self.proxy_port = port;
        self
    }

    /// Resolves the base URL all request paths are joined onto.
    ///
    /// Logs a warning when the application key is still
    /// [`PLACEHOLDER_API_KEY`], since the server will reject such requests.
    ///
    /// # Errors
    ///
    /// Returns an error if schema, host, port, and version do not form a
    /// valid URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use productlayer::RestClientConfig;
    ///
    /// let url = RestClientConfig::default().base_url()?;
    /// assert_eq!(url.as_str(), "https://api.productlayer.com:80/0.5/");
    /// # Ok::<(), productlayer::Error>(())
    /// ```
    pub fn base_url(&self) -> Result<Url> {
        if self.api_key == PLACEHOLDER_API_KEY {
            tracing::warn!(
                header = API_KEY_HEADER,
                "API key is still the placeholder; the server will reject requests"
            );
        }

        let url = Url::parse(&format!(
            "{}://{}:{}/{}/",
            self.api_schema, self.api_host, self.api_port, self.api_version
        ))?;

        tracing::debug!(url = %url, "Resolved API base URL");

        Ok(url)
    }

    /// Returns the proxy requests should be routed through, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the proxy is enabled but `proxy_host`/`proxy_port`
    /// do not form a usable proxy address.
    pub fn proxy(&self) -> Result<Option<reqwest::Proxy>> {
        if !self.proxy_enabled {
            return Ok(None);
        }

        let proxy = reqwest::Proxy::all(format!("http://{}:{}", self.proxy_host, self.proxy_port))
            .map_err(|e| Error::Configuration(format!("Invalid proxy settings: {}", e)))?;

        Ok(Some(proxy))
    }

    /// Builds an HTTP client configured per this config.
    ///
    /// This applies the proxy settings; request construction, retries, and
    /// authentication headers are the transport layer's concern.
    ///
    /// # Errors
    ///
    /// Returns an error if the proxy settings are unusable or the client
    /// cannot be constructed.
    pub fn build_http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();

        if let Some(proxy) = self.proxy()? {
            builder = builder.proxy(proxy);
        }

        builder
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RestClientConfig::default();

        assert_eq!(config.api_schema, "https");
        assert_eq!(config.api_host, "api.productlayer.com");
        assert_eq!(config.api_port, 80);
        assert_eq!(config.api_version, "0.5");
        assert_eq!(config.api_key, PLACEHOLDER_API_KEY);
        assert!(!config.proxy_enabled);
        assert_eq!(config.proxy_host, "localhost");
        assert_eq!(config.proxy_port, 8888);
    }

    #[test]
    fn test_full_constructor() {
        let config = RestClientConfig::new(
            "http",
            "localhost",
            8080,
            "1.0",
            "test-key",
            true,
            "proxy.internal",
            3128,
        );

        assert_eq!(config.api_schema, "http");
        assert_eq!(config.api_host, "localhost");
        assert_eq!(config.api_port, 8080);
        assert_eq!(config.api_version, "1.0");
        assert_eq!(config.api_key, "test-key");
        assert!(config.proxy_enabled);
        assert_eq!(config.proxy_host, "proxy.internal");
        assert_eq!(config.proxy_port, 3128);
    }

    #[test]
    fn test_clone_is_an_independent_snapshot() {
        let original = RestClientConfig::default().with_api_key("real-key");
        let mut copy = original.clone();

        assert_eq!(copy, original);

        copy.api_host = "api.staging.productlayer.com".to_string();
        copy.api_port = 443;
        copy.proxy_enabled = true;

        assert_eq!(original.api_host, "api.productlayer.com");
        assert_eq!(original.api_port, 80);
        assert!(!original.proxy_enabled);
    }

    #[test]
    fn test_base_url_joins_schema_host_port_version() {
        let url = RestClientConfig::default().base_url().unwrap();
        assert_eq!(url.as_str(), "https://api.productlayer.com:80/0.5/");

        let url = RestClientConfig::default()
            .with_api_schema("http")
            .with_api_host("localhost")
            .with_api_port(8080)
            .with_api_version("1.0")
            .base_url()
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/1.0/");
    }

    #[test]
    fn test_base_url_rejects_invalid_schema() {
        let result = RestClientConfig::default().with_api_schema("").base_url();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_proxy_is_none_when_disabled() {
        let config = RestClientConfig::default();
        assert!(config.proxy().unwrap().is_none());
    }

    #[test]
    fn test_proxy_present_when_enabled() {
        let config = RestClientConfig::default().with_proxy("localhost", 8888);
        assert!(config.proxy().unwrap().is_some());
    }

    #[test]
    fn test_build_http_client_with_proxy() {
        let config = RestClientConfig::default().with_proxy("localhost", 8888);
        assert!(config.build_http_client().is_ok());
    }
}
