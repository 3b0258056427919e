//! Transport options forwarded to the underlying prediction client
//!
//! These values are opaque to this crate: credentials are not parsed and dial
//! options are not interpreted. They are collected in order and handed to
//! the client constructor, which resolves any conflicts between them.

use secrecy::{ExposeSecret, SecretString};
use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};
use tonic::transport::Endpoint;

/// A deferred change to the gRPC endpoint the client dials
#[derive(Clone)]
pub struct DialOption(Arc<dyn Fn(Endpoint) -> Endpoint + Send + Sync>);

impl DialOption {
    /// Wraps a function that adjusts the endpoint before dialing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use vertexai_options::DialOption;
    ///
    /// let opt = DialOption::new(|endpoint| endpoint.tcp_nodelay(true));
    /// let custom = DialOption::new(|endpoint| endpoint.timeout(Duration::from_secs(30)));
    /// ```
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Endpoint) -> Endpoint + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(timeout: Duration) -> Self {
        Self::new(move |endpoint| endpoint.connect_timeout(timeout))
    }

    /// Sets the per-request timeout.
    pub fn timeout(timeout: Duration) -> Self {
        Self::new(move |endpoint| endpoint.timeout(timeout))
    }

    /// Sets the HTTP/2 keep-alive ping interval.
    pub fn keep_alive_interval(interval: Duration) -> Self {
        Self::new(move |endpoint| endpoint.http2_keep_alive_interval(interval))
    }

    /// Applies the option to `endpoint`.
    pub fn apply(&self, endpoint: Endpoint) -> Endpoint {
        (self.0)(endpoint)
    }

    /// Applies each option to `endpoint` in order.
    pub fn apply_all<'a, I>(endpoint: Endpoint, opts: I) -> Endpoint
    where
        I: IntoIterator<Item = &'a DialOption>,
    {
        opts.into_iter().fold(endpoint, |endpoint, opt| opt.apply(endpoint))
    }
}

impl fmt::Debug for DialOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DialOption(..)")
    }
}

/// A transport-level setting for the underlying client
#[derive(Clone)]
pub enum ClientOption {
    /// Authenticate with an API key
    ApiKey(SecretString),
    /// Load service account or refresh token credentials from a JSON file
    CredentialsFile(PathBuf),
    /// Service account or refresh token credentials as raw JSON
    CredentialsJson(Vec<u8>),
    /// Adjust the gRPC endpoint before dialing
    GrpcDial(DialOption),
    /// Use this HTTP client instead of creating one
    HttpClient(reqwest::Client),
}

/// The concern a [`ClientOption`] configures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientOptionKind {
    ApiKey,
    CredentialsFile,
    CredentialsJson,
    GrpcDial,
    HttpClient,
}

impl ClientOptionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApiKey => "api_key",
            Self::CredentialsFile => "credentials_file",
            Self::CredentialsJson => "credentials_json",
            Self::GrpcDial => "grpc_dial",
            Self::HttpClient => "http_client",
        }
    }
}

impl fmt::Display for ClientOptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ClientOption {
    pub(crate) fn api_key(key: String) -> Self {
        Self::ApiKey(SecretString::new(key.into()))
    }

    /// Which concern this option configures
    pub fn kind(&self) -> ClientOptionKind {
        match self {
            Self::ApiKey(_) => ClientOptionKind::ApiKey,
            Self::CredentialsFile(_) => ClientOptionKind::CredentialsFile,
            Self::CredentialsJson(_) => ClientOptionKind::CredentialsJson,
            Self::GrpcDial(_) => ClientOptionKind::GrpcDial,
            Self::HttpClient(_) => ClientOptionKind::HttpClient,
        }
    }

    /// The API key, for the client constructor to attach to requests
    pub fn expose_api_key(&self) -> Option<&str> {
        match self {
            Self::ApiKey(key) => Some(key.expose_secret()),
            _ => None,
        }
    }

    pub fn credentials_file(&self) -> Option<&Path> {
        match self {
            Self::CredentialsFile(path) => Some(path.as_path()),
            _ => None,
        }
    }

    pub fn credentials_json(&self) -> Option<&[u8]> {
        match self {
            Self::CredentialsJson(json) => Some(json.as_slice()),
            _ => None,
        }
    }
}

impl fmt::Debug for ClientOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey([REDACTED])"),
            Self::CredentialsFile(path) => f.debug_tuple("CredentialsFile").field(path).finish(),
            Self::CredentialsJson(json) => {
                write!(f, "CredentialsJson([REDACTED {} bytes])", json.len())
            }
            Self::GrpcDial(dial) => f.debug_tuple("GrpcDial").field(dial).finish(),
            Self::HttpClient(client) => f.debug_tuple("HttpClient").field(client).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let key = ClientOption::api_key("super-secret-key".to_string());
        let json = ClientOption::CredentialsJson(br#"{"private_key":"abc"}"#.to_vec());

        let key_debug = format!("{:?}", key);
        let json_debug = format!("{:?}", json);

        assert!(!key_debug.contains("super-secret-key"));
        assert!(!json_debug.contains("private_key"));
        assert_eq!(key.expose_api_key(), Some("super-secret-key"));
    }

    #[test]
    fn test_kind_matches_variant() {
        let opts = [
            ClientOption::api_key("k".to_string()),
            ClientOption::CredentialsFile(PathBuf::from("/tmp/creds.json")),
            ClientOption::CredentialsJson(b"{}".to_vec()),
            ClientOption::GrpcDial(DialOption::new(|endpoint| endpoint)),
            ClientOption::HttpClient(reqwest::Client::new()),
        ];
        let kinds: Vec<_> = opts.iter().map(ClientOption::kind).collect();

        assert_eq!(
            kinds,
            [
                ClientOptionKind::ApiKey,
                ClientOptionKind::CredentialsFile,
                ClientOptionKind::CredentialsJson,
                ClientOptionKind::GrpcDial,
                ClientOptionKind::HttpClient,
            ]
        );
        assert_eq!(
            opts[1].credentials_file(),
            Some(Path::new("/tmp/creds.json"))
        );
        assert_eq!(opts[2].credentials_json(), Some(&b"{}"[..]));
        assert_eq!(opts[0].credentials_file(), None);
    }

    #[test]
    fn test_dial_options_apply_in_order() {
        let first = DialOption::new(|_| Endpoint::from_static("http://first.example.com"));
        let second = DialOption::new(|_| Endpoint::from_static("http://second.example.com"));
        let start = Endpoint::from_static("http://us-central1-aiplatform.googleapis.com");

        let endpoint = DialOption::apply_all(start, [&first, &second]);

        assert_eq!(endpoint.uri().host(), Some("second.example.com"));
    }

    #[test]
    fn test_builtin_dial_options_keep_uri() {
        let start = Endpoint::from_static("http://us-central1-aiplatform.googleapis.com");
        let opts = [
            DialOption::connect_timeout(Duration::from_secs(5)),
            DialOption::timeout(Duration::from_secs(30)),
            DialOption::keep_alive_interval(Duration::from_secs(60)),
        ];

        let endpoint = DialOption::apply_all(start, &opts);

        assert_eq!(
            endpoint.uri().host(),
            Some("us-central1-aiplatform.googleapis.com")
        );
    }
}
