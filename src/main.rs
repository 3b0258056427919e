//! # Vertex AI Client Configuration
//!
//! Prints the configuration a Vertex AI client would be built with in the
//! current environment.
//!
//! ## Example
//!
//! ```bash
//! GOOGLE_CLOUD_PROJECT=my-project vertex-config
//! ```
//!
//! ## Configuration
//!
//! The tool reads a `.env` file if present, then the environment:
//!
//! - `GOOGLE_CLOUD_PROJECT`: Your Google Cloud project ID
//! - `GOOGLE_APPLICATION_CREDENTIALS`: Path to your service account key file
//! - `RUST_LOG`: Log filter, `warn` when unset

use anyhow::{Context, Result};
use colored::Colorize;
use std::env;
use tracing_subscriber::EnvFilter;

use vertexai_options::config::env as env_vars;
use vertexai_options::{with_credentials_file, ConfigOption, ModelKind, Options};

/// Main entry point for the application
fn main() -> Result<()> {
    init_tracing();

    println!("{}", "Vertex AI Client Configuration".green().bold());
    println!("{}", "==============================".green());
    println!();

    // Must run before the defaults are first read
    load_environment();

    let options = Options::new(environment_options());

    print_connection(&options)?;
    print_models(&options);
    check_credentials(&options);

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads environment variables from a .env file if it exists
fn load_environment() {
    match dotenv::dotenv() {
        Ok(path) => println!("Loaded environment from {}", path.display()),
        Err(e) => println!("No .env file found: {}", e),
    }
}

/// Options taken from the environment on top of the defaults
fn environment_options() -> Vec<ConfigOption> {
    let mut opts = Vec::new();
    if let Ok(path) = env::var(env_vars::CREDENTIALS) {
        if !path.is_empty() {
            opts.push(with_credentials_file(path));
        }
    }
    opts
}

fn print_connection(options: &Options) -> Result<()> {
    println!("\n{}", "Connection:".blue().bold());
    let json = serde_json::to_string_pretty(options.connect())
        .context("Failed to serialize connection options")?;
    println!("{}", json);
    Ok(())
}

fn print_models(options: &Options) {
    println!("\n{}", "Models:".blue().bold());
    for kind in ModelKind::ALL {
        println!(
            "{:<10} {} ({})",
            kind.as_str(),
            options.model_for(kind).cyan(),
            options.model_resource(kind)
        );
    }
    println!("Predict URL: {}", options.predict_url(ModelKind::Text).cyan());
}

/// Reports which settings the client will still need
fn check_credentials(options: &Options) {
    println!("\n{}", "Checking configuration...".blue().bold());

    if options.project_id.is_empty() {
        println!("❌ {} is not set", env_vars::PROJECT_ID);
    } else {
        println!(
            "✅ {} is set: {}",
            env_vars::PROJECT_ID,
            options.project_id.cyan()
        );
    }

    let credentials = options
        .client_options()
        .iter()
        .find_map(|opt| opt.credentials_file());
    match credentials {
        Some(path) => println!(
            "✅ {} is set: {}",
            env_vars::CREDENTIALS,
            path.display().to_string().cyan()
        ),
        None => println!(
            "❌ {} is not set, application default credentials will be used",
            env_vars::CREDENTIALS
        ),
    }
}
