//! mapembed CLI - Command-line interface
//!
//! Renders embeddable map fragments, manages the configuration file and,
//! with the `serve` feature, runs the HTTP front end.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::render::RenderArgs;
#[cfg(feature = "serve")]
use commands::serve::ServeArgs;
use error::CliError;
use runner::{CliRunner, ConfigMode, GlobalArgs};

#[derive(Debug, Parser)]
#[command(name = "mapembed")]
#[command(version, about = "Render embeddable HTML map widgets", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the per-user config.ini)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "mapembed=trace"
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the HTML fragment for a position
    Render(RenderArgs),

    /// List the supported providers
    Providers {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// View or modify configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Write a default configuration file
    Init,

    /// Serve fragments over HTTP
    #[cfg(feature = "serve")]
    Serve(ServeArgs),
}

impl Commands {
    /// Rendering needs a valid file; everything else must keep working so
    /// a broken file can be repaired.
    fn config_mode(&self) -> ConfigMode {
        match self {
            Commands::Render(_) => ConfigMode::Strict,
            #[cfg(feature = "serve")]
            Commands::Serve(_) => ConfigMode::Strict,
            Commands::Providers { .. } | Commands::Config { .. } | Commands::Init => {
                ConfigMode::Lenient
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let runner = CliRunner::new(
        GlobalArgs {
            config: cli.config,
            log_level: cli.log_level,
            log_file: cli.log_file,
        },
        cli.command.config_mode(),
    )?;

    match cli.command {
        Commands::Render(args) => {
            runner.log_startup("render");
            commands::render::run(args, &runner)
        }
        Commands::Providers { json } => commands::providers::run(json),
        Commands::Config { command } => commands::config::run(command, &runner),
        Commands::Init => commands::init::run(&runner),
        #[cfg(feature = "serve")]
        Commands::Serve(args) => {
            runner.log_startup("serve");
            commands::serve::run(args, &runner)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "mapembed", "render", "--lat", "-33.8688", "--lng", "-151.2093", "-p", "osm",
        ])
        .unwrap();

        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.lat, -33.8688);
                assert_eq!(args.lng, -151.2093);
                assert_eq!(args.provider.as_deref(), Some("osm"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_render_keys() {
        let cli = Cli::try_parse_from([
            "mapembed",
            "render",
            "--lat",
            "1",
            "--lng",
            "2",
            "--key",
            "MAPBOX_TOKEN=pk.abc",
            "--key",
            "BING_MAPS_KEY=b=1",
        ])
        .unwrap();

        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(
            args.keys,
            vec![
                ("MAPBOX_TOKEN".to_string(), "pk.abc".to_string()),
                ("BING_MAPS_KEY".to_string(), "b=1".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_rejects_malformed_key() {
        let result = Cli::try_parse_from([
            "mapembed", "render", "--lat", "1", "--lng", "2", "--key", "novalue",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_requires_coordinates() {
        assert!(Cli::try_parse_from(["mapembed", "render", "--lat", "1"]).is_err());
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mapembed",
            "providers",
            "--json",
            "--config",
            "/tmp/mapembed.ini",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/mapembed.ini")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Commands::Providers { json: true }));
    }

    #[test]
    fn test_config_modes() {
        let render = Cli::try_parse_from(["mapembed", "render", "--lat", "1", "--lng", "2"]).unwrap();
        assert_eq!(render.command.config_mode(), ConfigMode::Strict);

        for argv in [
            vec!["mapembed", "providers"],
            vec!["mapembed", "init"],
            vec!["mapembed", "config", "path"],
            vec!["mapembed", "config", "set", "map.default_provider", "osm"],
        ] {
            let cli = Cli::try_parse_from(argv).unwrap();
            assert_eq!(cli.command.config_mode(), ConfigMode::Lenient);
        }
    }

    #[test]
    fn test_config_set_parses() {
        let cli =
            Cli::try_parse_from(["mapembed", "config", "set", "map.default_provider", "osm"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::Set { .. }
            }
        ));
    }
}
