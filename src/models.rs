use serde::{Deserialize, Serialize};
use std::fmt;

/// Default model for text completion
pub const TEXT_MODEL_NAME: &str = "text-bison";
/// Default model for chat
pub const CHAT_MODEL_NAME: &str = "chat-bison";
/// Default model for embeddings
pub const EMBEDDING_MODEL_NAME: &str = "textembedding-gecko";

/// The capability a model is selected for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Text,
    Chat,
    Embedding,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::Text, ModelKind::Chat, ModelKind::Embedding];

    /// The model used for this capability when none is configured
    pub fn default_model(self) -> &'static str {
        match self {
            ModelKind::Text => TEXT_MODEL_NAME,
            ModelKind::Chat => CHAT_MODEL_NAME,
            ModelKind::Embedding => EMBEDDING_MODEL_NAME,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Text => "text",
            ModelKind::Chat => "chat",
            ModelKind::Embedding => "embedding",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the full resource name of a publisher model
///
/// No field is validated; an empty project ID yields an empty path segment
/// and is left for the API to reject.
///
/// # Example
///
/// ```rust
/// use vertexai_options::models::model_resource_name;
///
/// let name = model_resource_name("my-project", "us-central1", "google", "text-bison");
/// assert_eq!(
///     name,
///     "projects/my-project/locations/us-central1/publishers/google/models/text-bison"
/// );
/// ```
pub fn model_resource_name(
    project_id: &str,
    location: &str,
    publisher: &str,
    model: &str,
) -> String {
    format!(
        "projects/{}/locations/{}/publishers/{}/models/{}",
        project_id, location, publisher, model
    )
}

/// Builds the REST prediction URL for a model resource
///
/// The endpoint is given in `host:port` form; the default HTTPS port is
/// dropped from the URL.
pub fn predict_url(endpoint: &str, resource: &str) -> String {
    let host = endpoint.strip_suffix(":443").unwrap_or(endpoint);
    format!("https://{}/v1/{}:predict", host, resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_models_per_kind() {
        assert_eq!(ModelKind::Text.default_model(), "text-bison");
        assert_eq!(ModelKind::Chat.default_model(), "chat-bison");
        assert_eq!(ModelKind::Embedding.default_model(), "textembedding-gecko");
    }

    #[test]
    fn test_resource_name_keeps_empty_project() {
        assert_eq!(
            model_resource_name("", "us-central1", "google", "chat-bison"),
            "projects//locations/us-central1/publishers/google/models/chat-bison"
        );
    }

    #[test]
    fn test_predict_url_strips_default_port() {
        let resource = "projects/p/locations/europe-west4/publishers/google/models/m";

        assert_eq!(
            predict_url("europe-west4-aiplatform.googleapis.com:443", resource),
            format!("https://europe-west4-aiplatform.googleapis.com/v1/{}:predict", resource)
        );
        assert_eq!(
            predict_url("localhost:8443", resource),
            format!("https://localhost:8443/v1/{}:predict", resource)
        );
    }

    #[test]
    fn test_model_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ModelKind::Embedding).unwrap(),
            "\"embedding\""
        );
    }
}
