//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config) are inherited by all subcommands
//! - `deploy` selects exactly one profile per invocation

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::GitRef;

/// simdeploy - deploy a git checkout to simulation hosts over SSH
#[derive(Parser, Debug)]
#[command(name = "simdeploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./simdeploy.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the configured target profiles
    Profiles,

    /// Show how a profile resolves (hosts, user, port, directory)
    Show {
        /// Profile name
        profile: String,
    },

    /// Clone or update the remote working copy on every host of a profile
    Deploy {
        /// Profile name
        profile: String,

        /// Branch, tag or commit to check out
        #[arg(short = 'r', long = "ref", value_name = "REF", default_value = "master")]
        git_ref: GitRef,

        /// Continue with the remaining hosts after a failure
        #[arg(short, long)]
        keep_going: bool,

        /// Dry run - probe the remote but only print the commands that would run
        #[arg(long)]
        dry_run: bool,
    },
}
