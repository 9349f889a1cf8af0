//! simdeploy CLI - deploy a git checkout to simulation hosts
//!
//! Usage: simdeploy <COMMAND>
//!
//! Commands:
//!   profiles  List the configured target profiles
//!   show      Show how a profile resolves
//!   deploy    Clone or update the remote working copy on a profile's hosts

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use simdeploy::presentation::cli::{Cli, Commands};
use simdeploy::{ConfigError, DeployError};

mod commands;

/// Environment variable that overrides `-v` for log filtering
const LOG_ENV: &str = "SIMDEPLOY_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Profiles => commands::profiles::cmd_profiles(config, cli.json).map(|()| 0),
        Commands::Show { profile } => {
            commands::profiles::cmd_show(config, &profile, cli.json).map(|()| 0)
        }
        Commands::Deploy {
            profile,
            git_ref,
            keep_going,
            dry_run,
        } => commands::deploy::cmd_deploy(commands::deploy::DeployArgs {
            config,
            profile: &profile,
            git_ref,
            keep_going,
            dry_run,
            json: cli.json,
        }),
    }
}

/// Logs go to stderr so stdout stays clean for `--json`
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(deploy) = err.downcast_ref::<DeployError>() {
        return deploy.exit_code();
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return 2;
    }
    1
}
