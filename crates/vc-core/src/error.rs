//! Error types for the vclive client
//!
//! Every failure here is terminal for the current application launch: it is
//! surfaced once through the notification frontend and the feature stays
//! inert until the next launch. Nothing in this taxonomy may crash the host.

use thiserror::Error;

/// Main error type for the client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Could not locate guest memory for {0}")]
    RegionNotFound(String),

    #[error("Session start failed: {0}")]
    SessionStart(String),

    #[error("Polling thread error: {0}")]
    ThreadSpawn(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
