//! The process-wide defaults are read from the environment once.
//!
//! This binary holds a single test because it mutates the environment and
//! depends on being the first to touch the defaults.

use vertexai_options::config::env::PROJECT_ID;
use vertexai_options::models::{CHAT_MODEL_NAME, EMBEDDING_MODEL_NAME, TEXT_MODEL_NAME};
use vertexai_options::{defaults, with_project_id, Options};

#[test]
fn test_defaults_read_environment_once() {
    std::env::set_var(PROJECT_ID, "first-project");

    let first = Options::new([]);
    assert_eq!(first.project_id, "first-project");
    assert_eq!(first.publisher, "google");
    assert_eq!(first.endpoint, "us-central1-aiplatform.googleapis.com:443");
    assert_eq!(first.location, "us-central1");
    assert_eq!(first.model(), TEXT_MODEL_NAME);
    assert_eq!(first.chat_model(), CHAT_MODEL_NAME);
    assert_eq!(first.embedding_model(), EMBEDDING_MODEL_NAME);
    assert!(first.client_options().is_empty());

    std::env::set_var(PROJECT_ID, "second-project");

    let second = Options::new([]);
    assert_eq!(second.project_id, "first-project");
    assert_eq!(defaults().project_id, "first-project");
    assert_eq!(second.connect(), first.connect());

    let overridden = Options::new([with_project_id("proj-x")]);
    assert_eq!(overridden.project_id, "proj-x");
    assert_eq!(defaults().project_id, "first-project");
}
