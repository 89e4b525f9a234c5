//! # Pitwall CLI Module
//!
//! This module implements the CLI interface for Pitwall.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `workflow` - Show the weekend workflow catalog

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::api::ApiError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Pitwall - Race Weekend Control
///
/// Tracks each team's progress through a race weekend: Practice,
/// Qualifying, Race and Review, with practice and qualifying segments
/// advanced one step at a time by the lead engineer.
#[derive(Parser, Debug)]
#[command(name = "pitwall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to (defaults to 127.0.0.1)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (defaults to 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to a TOML config file with server settings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the weekend workflow catalog
    Workflow,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), ApiError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port, config }) => {
            cmd_server(host, port, config.as_deref()).await
        }
        Some(Commands::Workflow) => cmd_workflow(json_mode),
        None => {
            // No subcommand - show the workflow catalog by default
            cmd_workflow(json_mode)
        }
    }
}
