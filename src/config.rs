//! Configuration module for Vertex AI clients
//!
//! This module provides the [`Options`] handed to the underlying prediction
//! client, and the process-wide defaults seeded from the environment.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::sync::OnceLock;
use tracing::debug;

use crate::models::{self, ModelKind};
use crate::options::{self, ConfigOption};
use crate::transport::{ClientOption, DialOption};

/// Environment variables used by the crate
pub mod env {
    /// The Google Cloud project ID environment variable
    pub const PROJECT_ID: &str = "GOOGLE_CLOUD_PROJECT";
    /// The Google Cloud credentials environment variable
    pub const CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";
}

/// Default model publisher namespace
pub const DEFAULT_PUBLISHER: &str = "google";
/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "us-central1-aiplatform.googleapis.com:443";
/// Default deployment region
pub const DEFAULT_LOCATION: &str = "us-central1";

/// Connection parameters for the Vertex AI endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectOptions {
    /// The model publisher namespace
    pub publisher: String,
    /// The network address of the API, including the port
    pub endpoint: String,
    /// The region the models are served from
    pub location: String,
    /// The Google Cloud project ID, empty when unknown
    pub project_id: String,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            publisher: DEFAULT_PUBLISHER.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            project_id: String::new(),
        }
    }
}

/// Configuration for a Vertex AI client
///
/// Built from the process-wide defaults with [`Options::new`], then consumed
/// by the client constructor. Connection fields are reachable directly
/// through [`Deref`] to [`ConnectOptions`].
#[derive(Debug, Clone)]
pub struct Options {
    pub(crate) model: String,
    pub(crate) chat_model: String,
    pub(crate) embedding_model: String,
    pub(crate) connect: ConnectOptions,
    pub(crate) client_options: Vec<ClientOption>,
}

impl Default for Options {
    /// Fixed defaults with an empty project ID. Does not read the environment.
    fn default() -> Self {
        Self {
            model: ModelKind::Text.default_model().to_string(),
            chat_model: ModelKind::Chat.default_model().to_string(),
            embedding_model: ModelKind::Embedding.default_model().to_string(),
            connect: ConnectOptions::default(),
            client_options: Vec::new(),
        }
    }
}

impl Options {
    /// Builds options from the process-wide defaults and the given options,
    /// applied in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vertexai_options::{with_model, with_project_id, Options};
    ///
    /// let options = Options::new([with_project_id("my-project"), with_model("gemini-pro")]);
    /// assert_eq!(options.model(), "gemini-pro");
    /// assert_eq!(options.project_id, "my-project");
    /// ```
    pub fn new<I>(opts: I) -> Self
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        PROCESS_DEFAULTS.build(opts)
    }

    /// Builds the default options, reading variables through `lookup`.
    ///
    /// A missing variable leaves the corresponding field empty.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        options.connect.project_id = lookup(env::PROJECT_ID).unwrap_or_default();
        options
    }

    /// Applies one more option, consuming and returning `self`.
    pub fn with(mut self, opt: ConfigOption) -> Self {
        opt.apply_to(&mut self);
        self
    }

    /// The text completion model
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The chat model
    pub fn chat_model(&self) -> &str {
        &self.chat_model
    }

    /// The embedding model
    pub fn embedding_model(&self) -> &str {
        &self.embedding_model
    }

    /// The model configured for the given capability
    pub fn model_for(&self, kind: ModelKind) -> &str {
        match kind {
            ModelKind::Text => &self.model,
            ModelKind::Chat => &self.chat_model,
            ModelKind::Embedding => &self.embedding_model,
        }
    }

    /// Full resource name of the model configured for `kind`
    pub fn model_resource(&self, kind: ModelKind) -> String {
        models::model_resource_name(
            &self.connect.project_id,
            &self.connect.location,
            &self.connect.publisher,
            self.model_for(kind),
        )
    }

    /// REST prediction URL of the model configured for `kind`
    pub fn predict_url(&self, kind: ModelKind) -> String {
        models::predict_url(&self.connect.endpoint, &self.model_resource(kind))
    }

    /// The connection parameters
    pub fn connect(&self) -> &ConnectOptions {
        &self.connect
    }

    /// Transport options in the order they were added
    pub fn client_options(&self) -> &[ClientOption] {
        &self.client_options
    }

    /// gRPC dial options in the order they were added
    pub fn dial_options(&self) -> impl Iterator<Item = &DialOption> {
        self.client_options.iter().filter_map(|opt| match opt {
            ClientOption::GrpcDial(dial) => Some(dial),
            _ => None,
        })
    }

    /// Splits the options into the parts the client constructor consumes.
    pub fn into_parts(self) -> ClientParts {
        ClientParts {
            model: self.model,
            chat_model: self.chat_model,
            embedding_model: self.embedding_model,
            connect: self.connect,
            client_options: self.client_options,
        }
    }
}

/// Everything the client constructor needs, by value
#[derive(Debug, Clone)]
pub struct ClientParts {
    pub model: String,
    pub chat_model: String,
    pub embedding_model: String,
    pub connect: ConnectOptions,
    pub client_options: Vec<ClientOption>,
}

impl Deref for Options {
    type Target = ConnectOptions;

    fn deref(&self) -> &Self::Target {
        &self.connect
    }
}

impl DerefMut for Options {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.connect
    }
}

/// Function used to read environment variables
pub type EnvLookup = fn(&str) -> Option<String>;

/// Default options computed from the environment exactly once
///
/// The first call to [`DefaultSnapshot::get`] reads the environment through
/// the lookup function; every later call, from any thread, returns the same
/// snapshot without reading it again.
pub struct DefaultSnapshot<F = EnvLookup> {
    lookup: F,
    cell: OnceLock<Options>,
}

impl<F> DefaultSnapshot<F> {
    /// Creates an empty snapshot that reads variables through `lookup`.
    pub const fn new(lookup: F) -> Self {
        Self {
            lookup,
            cell: OnceLock::new(),
        }
    }

    /// Whether the snapshot has been computed yet
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<F> DefaultSnapshot<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Returns the snapshot, computing it on first access.
    pub fn get(&self) -> &Options {
        self.cell.get_or_init(|| {
            let options = Options::from_lookup(&self.lookup);
            debug!(
                project_id_set = !options.project_id.is_empty(),
                "computed default Vertex AI options"
            );
            options
        })
    }

    /// Copies the snapshot and applies `opts` to the copy in order.
    pub fn build<I>(&self, opts: I) -> Options
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        options::apply(self.get().clone(), opts)
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

static PROCESS_DEFAULTS: DefaultSnapshot = DefaultSnapshot::new(read_env as EnvLookup);

/// Returns the process-wide default options.
///
/// The environment is read on the first call only.
pub fn defaults() -> &'static Options {
    PROCESS_DEFAULTS.get()
}
