//! Title classification and metadata for vclive
//!
//! Maps CafeOS title identifiers onto the platform the title actually runs
//! (native software or one of the Virtual Console cores) and carries the
//! per-launch title identity.

pub mod classify;
pub mod meta;
pub mod platform;

pub use classify::{classify, TitleType};
pub use meta::{sanitize_title_name, TitleInfo};
pub use platform::Platform;
