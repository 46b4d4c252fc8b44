//! Serve command - run the HTTP front end.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use clap::Args;
use mapembed::server::{self, ServerState};
use mapembed::MapRenderer;

use super::common::build_credentials;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the serve command.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on (defaults to server.host)
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to listen on (defaults to server.port)
    #[arg(long)]
    pub port: Option<u16>,

    /// Ignore credentials set in environment variables
    #[arg(long)]
    pub no_env: bool,
}

/// Run the serve command. Blocks until the server fails.
pub fn run(args: ServeArgs, runner: &CliRunner) -> Result<(), CliError> {
    let addr = bind_address(&args, runner);
    let state = build_state(&args, runner);

    println!("Serving map fragments on http://{}/map", addr);

    let runtime = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    runtime.block_on(server::serve(addr, state))?;
    Ok(())
}

fn bind_address(args: &ServeArgs, runner: &CliRunner) -> SocketAddr {
    let settings = &runner.config().server;
    SocketAddr::new(
        args.host.unwrap_or(settings.host),
        args.port.unwrap_or(settings.port),
    )
}

fn build_state(args: &ServeArgs, runner: &CliRunner) -> ServerState {
    let config = runner.config();
    let credentials = build_credentials(Vec::new(), !args.no_env, config);
    let renderer = MapRenderer::new()
        .with_container(config.map.container())
        .with_credentials(Arc::new(credentials));

    ServerState::new(renderer, config.map.default_provider)
}
