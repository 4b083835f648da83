//! Core types for the vclive client
//!
//! This crate provides the foundational scalar types, error handling and
//! persistent settings shared by the rest of the workspace.

pub mod config;
pub mod error;
pub mod types;

pub use config::{Credentials, Settings, SyncMethod};
pub use error::{ClientError, Result};
pub use types::{ByteOrder, Severity};
