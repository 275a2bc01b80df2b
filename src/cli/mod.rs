//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod challenge;

pub use challenge::{handle_challenge_command, ChallengeArgs};
