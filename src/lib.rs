//! canvus: command-line client for the Canvus collaboration platform
//!
//! Layers:
//! - `domain`: credential masking, API key and session types (no I/O)
//! - `application`: status report assembled from settings and environment
//! - `infrastructure`: process environment access
//! - `cli`: argument parsing, command dispatch, terminal output

pub mod application;
pub mod build_info;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
