//! # Pitwall Application Library
//!
//! Library surface of the Pitwall binary, exposed so integration tests can
//! exercise the HTTP router and CLI plumbing directly. The binary in
//! `main.rs` wires these same modules behind argument parsing and tracing
//! setup.

pub mod api;
pub mod cli;
pub mod config;
