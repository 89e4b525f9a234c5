//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use std::path::Path;

use pitwall_core::{
    CLEAR_SEGMENT_LABEL, PRACTICE_EXIT_GATE, Paddock, PracticeExitGate, Stage,
};

use crate::api::{self, ApiError};
use crate::config::ServerConfig;

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&Path>,
) -> Result<(), ApiError> {
    let file_config = match config_path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    let (host, port) = file_config.resolve(host, port);

    println!("Pitwall Race Weekend Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host: {}", host);
    println!("  Port: {}", port);
    println!();
    println!("Endpoints:");
    println!("  GET  /health - Health check");
    println!("  POST /teams - Register a team");
    println!("  GET  /teams - List teams");
    println!("  GET  /teams/{{team_id}} - Fetch a team");
    println!("  POST /teams/{{team_id}}/weekends - Open a weekend");
    println!("  GET  /teams/{{team_id}}/weekends - List a team's weekends");
    println!("  GET  /teams/{{team_id}}/weekends/{{weekend_id}} - Fetch a weekend");
    println!("  POST /teams/{{team_id}}/weekends/{{weekend_id}}/transition - Move a weekend");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, Paddock::new()).await
}

// =============================================================================
// WORKFLOW COMMAND
// =============================================================================

/// Show the weekend workflow catalog.
pub fn cmd_workflow(json_mode: bool) -> Result<(), ApiError> {
    let practice_gate = match PRACTICE_EXIT_GATE {
        PracticeExitGate::Open => "open",
        PracticeExitGate::AfterFinalSegment => "after_final_segment",
    };

    if json_mode {
        let stages: Vec<serde_json::Value> = Stage::ORDER
            .iter()
            .map(|stage| {
                serde_json::json!({
                    "name": stage.name(),
                    "position": stage.position(),
                    "next": stage.next().map(|next| next.name()),
                    "segments": stage
                        .segments()
                        .iter()
                        .map(|segment| segment.name())
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        let output = serde_json::json!({
            "stages": stages,
            "practice_exit_gate": practice_gate,
            "clear_segment_label": CLEAR_SEGMENT_LABEL,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Pitwall Weekend Workflow");
    println!("========================");
    println!();
    println!("Stages:");
    for stage in Stage::ORDER {
        if stage.holds_segments() {
            let segments = stage
                .segments()
                .iter()
                .map(|segment| segment.name())
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {}. {} (segments: {})", stage.position() + 1, stage, segments);
        } else {
            println!("  {}. {}", stage.position() + 1, stage);
        }
    }
    println!();
    println!("Rules:");
    println!("  - Only the lead engineer may move a weekend.");
    println!("  - New weekends start in Practice with no segment selected.");
    println!("  - Segments advance one step at a time within their stage.");
    match PRACTICE_EXIT_GATE {
        PracticeExitGate::Open => {
            println!("  - Practice -> Qualifying is always available.");
        }
        PracticeExitGate::AfterFinalSegment => {
            println!("  - Practice -> Qualifying requires the P3 segment to be complete.");
        }
    }
    println!("  - Qualifying -> Race requires the Q3 segment to be complete.");
    println!("  - Race -> Review is always available.");
    println!(
        "  - A toSegment of \"{}\" clears the segment once P3 is complete.",
        CLEAR_SEGMENT_LABEL
    );

    Ok(())
}
