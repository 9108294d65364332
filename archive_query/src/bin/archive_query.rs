//! Archive Query Command-Line Tool
//!
//! Reads a search request, validates it and prints the pruned where condition
//! as JSON (`null` when the request constrains nothing).
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin archive-query -- request.json
//! cargo run --bin archive-query -- request.toml
//! ```
//!
//! The request holds the three parameter groups:
//!
//! ```json
//! {
//!   "general": { "observationNight": "2019-02-17", "productTypes": ["Science"] },
//!   "target": { "rightAscension": "10", "declination": "-20", "searchConeRadius": "30" },
//!   "telescope": { "instruments": ["RSS"] }
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `ARCHIVE_QUERY_CONFIG`: Path of the query configuration file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use archive_query::conditions::ConditionBuilder;
use archive_query::config::QueryConfig;
use archive_query::models::{
    GeneralQueryParameters, TargetQueryParameters, TelescopeQueryParameters,
};
use archive_query::validation::{is_error, FieldErrors};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchRequest {
    general: GeneralQueryParameters,
    target: TargetQueryParameters,
    telescope: Option<TelescopeQueryParameters>,
}

fn read_request(path: &Path) -> anyhow::Result<SearchRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    let request = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("Invalid TOML request in {}", path.display()))?,
        _ => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON request in {}", path.display()))?,
    };
    Ok(request)
}

fn report_errors(name: &str, errors: &dyn FieldErrors) {
    for message in errors.messages().into_iter().flatten() {
        eprintln!("{}: {}", name, message);
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => bail!("Usage: archive-query <request.json|request.toml>"),
    };

    let config = QueryConfig::load().context("Failed to load query configuration")?;
    let mut request = read_request(Path::new(&path))?;
    info!("Read search request from {}", path);

    request.general.validate();
    request.target.validate();
    if is_error(&[&request.general.errors, &request.target.errors]) {
        report_errors("general", &request.general.errors);
        report_errors("target", &request.target.errors);
        bail!("The search request contains invalid fields");
    }

    let condition = ConditionBuilder::new(config)
        .search_condition(&request.general, &request.target, request.telescope.as_ref())
        .context("Failed to build the where condition")?;
    if condition.is_none() {
        info!("Search request has no constraints");
    }

    println!("{}", serde_json::to_string_pretty(&condition)?);
    Ok(())
}
