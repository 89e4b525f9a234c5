//! # Pitwall - Race Weekend Control
//!
//! The main binary for the Pitwall race weekend tracker.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for server and workflow inspection
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              apps/pitwall (THE BINARY)        │
//! │                                               │
//! │   ┌─────────────┐       ┌─────────────┐       │
//! │   │   CLI       │       │   HTTP API  │       │
//! │   │  (clap)     │       │   (axum)    │       │
//! │   └──────┬──────┘       └──────┬──────┘       │
//! │          │                     │              │
//! │          └──────────┬──────────┘              │
//! │                     ▼                         │
//! │             ┌──────────────┐                  │
//! │             │ pitwall-core │                  │
//! │             │ (THE LOGIC)  │                  │
//! │             └──────────────┘                  │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! pitwall server --host 0.0.0.0 --port 8080
//!
//! # Show the workflow catalog
//! pitwall workflow
//! pitwall --json-mode workflow
//! ```

mod api;
mod cli;
mod config;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — PITWALL_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("PITWALL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pitwall=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Pitwall startup banner.
fn print_banner() {
    println!(
        r#"
  ██████╗ ██╗████████╗██╗    ██╗ █████╗ ██╗     ██╗
  ██╔══██╗██║╚══██╔══╝██║    ██║██╔══██╗██║     ██║
  ██████╔╝██║   ██║   ██║ █╗ ██║███████║██║     ██║
  ██╔═══╝ ██║   ██║   ██║███╗██║██╔══██║██║     ██║
  ██║     ██║   ██║   ╚███╔███╔╝██║  ██║███████╗███████╗
  ╚═╝     ╚═╝   ╚═╝    ╚══╝╚══╝ ╚═╝  ╚═╝╚══════╝╚══════╝

  Race Weekend Control v{}

  Practice • Qualifying • Race • Review
"#,
        env!("CARGO_PKG_VERSION")
    );
}
