//! Options applied on top of the default configuration
//!
//! Each constructor returns a [`ConfigOption`], a deferred change to
//! [`Options`]. Options are applied in the order given: scalar fields take
//! the last value written, while transport options accumulate.

use std::path::PathBuf;
use tracing::trace;

use crate::config::Options;
use crate::transport::{ClientOption, DialOption};

/// A deferred change to [`Options`]
#[derive(Debug, Clone)]
pub enum ConfigOption {
    Model(String),
    ChatModel(String),
    EmbeddingModel(String),
    ProjectId(String),
    Location(String),
    Endpoint(String),
    Publisher(String),
    /// Appended to the transport options
    Client(ClientOption),
}

impl ConfigOption {
    /// Writes this option into `options`.
    pub fn apply_to(self, options: &mut Options) {
        match self {
            ConfigOption::Model(model) => {
                trace!(option = "model", "applying option");
                options.model = model;
            }
            ConfigOption::ChatModel(model) => {
                trace!(option = "chat_model", "applying option");
                options.chat_model = model;
            }
            ConfigOption::EmbeddingModel(model) => {
                trace!(option = "embedding_model", "applying option");
                options.embedding_model = model;
            }
            ConfigOption::ProjectId(project_id) => {
                trace!(option = "project_id", "applying option");
                options.connect.project_id = project_id;
            }
            ConfigOption::Location(location) => {
                trace!(option = "location", "applying option");
                options.connect.location = location;
            }
            ConfigOption::Endpoint(endpoint) => {
                trace!(option = "endpoint", "applying option");
                options.connect.endpoint = endpoint;
            }
            ConfigOption::Publisher(publisher) => {
                trace!(option = "publisher", "applying option");
                options.connect.publisher = publisher;
            }
            ConfigOption::Client(client_option) => {
                trace!(option = %client_option.kind(), "appending client option");
                options.client_options.push(client_option);
            }
        }
    }
}

impl From<ClientOption> for ConfigOption {
    fn from(option: ClientOption) -> Self {
        ConfigOption::Client(option)
    }
}

/// Applies `opts` to `options` in order and returns the result.
pub fn apply<I>(mut options: Options, opts: I) -> Options
where
    I: IntoIterator<Item = ConfigOption>,
{
    for opt in opts {
        opt.apply_to(&mut options);
    }
    options
}

/// Sets the text completion model.
pub fn with_model(model: impl Into<String>) -> ConfigOption {
    ConfigOption::Model(model.into())
}

/// Sets the chat model.
pub fn with_chat_model(model: impl Into<String>) -> ConfigOption {
    ConfigOption::ChatModel(model.into())
}

/// Sets the embedding model.
pub fn with_embedding_model(model: impl Into<String>) -> ConfigOption {
    ConfigOption::EmbeddingModel(model.into())
}

/// Sets the Google Cloud project ID, overriding `GOOGLE_CLOUD_PROJECT`.
pub fn with_project_id(project_id: impl Into<String>) -> ConfigOption {
    ConfigOption::ProjectId(project_id.into())
}

/// Sets the deployment region. The endpoint is left as configured.
pub fn with_location(location: impl Into<String>) -> ConfigOption {
    ConfigOption::Location(location.into())
}

/// Sets the API endpoint in `host:port` form.
pub fn with_endpoint(endpoint: impl Into<String>) -> ConfigOption {
    ConfigOption::Endpoint(endpoint.into())
}

/// Sets the model publisher namespace.
pub fn with_publisher(publisher: impl Into<String>) -> ConfigOption {
    ConfigOption::Publisher(publisher.into())
}

/// Authenticates with an API key.
pub fn with_api_key(api_key: impl Into<String>) -> ConfigOption {
    convert_option(ClientOption::api_key)(api_key.into())
}

/// Authenticates with the service account or refresh token JSON credentials
/// file at `path`.
pub fn with_credentials_file(path: impl Into<PathBuf>) -> ConfigOption {
    convert_option(ClientOption::CredentialsFile)(path.into())
}

/// Authenticates with service account or refresh token JSON credentials.
pub fn with_credentials_json(json: impl Into<Vec<u8>>) -> ConfigOption {
    convert_option(ClientOption::CredentialsJson)(json.into())
}

/// Adds a gRPC dial option.
pub fn with_grpc_dial_option(opt: DialOption) -> ConfigOption {
    convert_option(ClientOption::GrpcDial)(opt)
}

/// Uses `client` for HTTP requests.
pub fn with_http_client(client: reqwest::Client) -> ConfigOption {
    convert_option(ClientOption::HttpClient)(client)
}

fn convert_option<T>(convert: fn(T) -> ClientOption) -> impl Fn(T) -> ConfigOption {
    move |param| ConfigOption::Client(convert(param))
}
