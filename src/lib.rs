//! # Vertex AI Client Options
//!
//! Configuration for building Google Cloud Vertex AI language model clients.
//! This library collects the connection parameters, model selection and
//! transport options that the underlying prediction client is built from.
//!
//! ## Features
//!
//! - Process-wide defaults seeded once from the environment
//! - Ordered, composable options
//! - Per-capability model selection (text, chat, embeddings)
//! - Credential, gRPC dial and HTTP client transport options
//!
//! ## Example
//!
//! ```rust
//! use vertexai_options::{with_api_key, with_model, with_project_id, ModelKind, Options};
//!
//! let options = Options::new([
//!     with_project_id("my-project-id"),
//!     with_model("text-bison@002"),
//!     with_api_key("my-api-key"),
//! ]);
//!
//! assert_eq!(options.location, "us-central1");
//! assert_eq!(
//!     options.model_resource(ModelKind::Text),
//!     "projects/my-project-id/locations/us-central1/publishers/google/models/text-bison@002"
//! );
//! assert_eq!(options.client_options().len(), 1);
//! ```
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `GOOGLE_CLOUD_PROJECT`: Your Google Cloud project ID. Read once, the
//!   first time the defaults are needed; later changes are not observed.
//!
//! ## Error Handling
//!
//! Options cannot fail. Nothing is validated here: missing project IDs,
//! malformed credentials or unknown models are reported by the client
//! constructor or by the API itself.
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod config;
pub mod models;
pub mod options;
pub mod transport;

// Re-export commonly used items
pub use config::{defaults, ClientParts, ConnectOptions, DefaultSnapshot, Options};
pub use models::ModelKind;
pub use options::{
    apply, with_api_key, with_chat_model, with_credentials_file, with_credentials_json,
    with_embedding_model, with_endpoint, with_grpc_dial_option, with_http_client, with_location,
    with_model, with_project_id, with_publisher, ConfigOption,
};
pub use transport::{ClientOption, ClientOptionKind, DialOption};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
