//! Render command - print the HTML fragment for a position.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use mapembed::provider::ProviderId;
use mapembed::MapRenderer;
use tracing::{info, warn};

use super::common::{build_credentials, parse_key_value};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the render command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Provider token (defaults to map.default_provider)
    #[arg(long, short)]
    pub provider: Option<String>,

    /// Element id of the map container
    #[arg(long)]
    pub container_id: Option<String>,

    /// CSS width of the container, e.g. 100% or 640px
    #[arg(long)]
    pub width: Option<String>,

    /// CSS height of the container
    #[arg(long)]
    pub height: Option<String>,

    /// Credential override, repeatable (e.g. --key MAPBOX_TOKEN=pk.xxx)
    #[arg(long = "key", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub keys: Vec<(String, String)>,

    /// Ignore credentials set in environment variables
    #[arg(long)]
    pub no_env: bool,

    /// Write the fragment to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Run the render command.
pub fn run(mut args: RenderArgs, runner: &CliRunner) -> Result<(), CliError> {
    let output = args.output.take();
    let html = render(args, runner);

    match output {
        Some(path) => {
            std::fs::write(&path, &html).map_err(|source| CliError::Output {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), bytes = html.len(), "Wrote map fragment");
        }
        None => println!("{}", html),
    }
    Ok(())
}

/// Build the fragment for `args` using the runner's configuration.
///
/// CLI values take precedence over the `[map]` section.
fn render(args: RenderArgs, runner: &CliRunner) -> String {
    let config = runner.config();

    let provider = args
        .provider
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| config.map.default_provider.token().to_string());
    if ProviderId::lookup(&provider).is_none() {
        warn!(%provider, "Provider not supported");
    }

    let mut container = config.map.container();
    if let Some(id) = args.container_id {
        container.id = id;
    }
    if let Some(width) = args.width {
        container.width = width;
    }
    if let Some(height) = args.height {
        container.height = height;
    }

    let credentials = build_credentials(args.keys, !args.no_env, config);

    MapRenderer::new()
        .with_container(container)
        .with_credentials(Arc::new(credentials))
        .render(args.lat, args.lng, &provider)
}
