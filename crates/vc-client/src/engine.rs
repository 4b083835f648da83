//! External session engine interface
//!
//! The engine behind these calls (login, script evaluation, memory notes)
//! is an opaque collaborator; the polling task only decides when to call it.

use vc_core::Result;

/// Identity payload handed to the engine at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameIdentity {
    /// Legacy emulated platforms identify by content hash: the engine
    /// hashes the sampled ROM bytes.
    FileHash {
        library: &'static str,
        title: String,
        data: Vec<u8>,
    },
    /// Native titles identify by product code and version.
    ProductCode {
        library: &'static str,
        title: String,
        product: String,
        version: String,
    },
}

impl GameIdentity {
    pub fn library(&self) -> &'static str {
        match self {
            Self::FileHash { library, .. } | Self::ProductCode { library, .. } => library,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::FileHash { title, .. } | Self::ProductCode { title, .. } => title,
        }
    }
}

pub trait Engine: Send + Sync {
    /// Establish the session for this launch. Failure is terminal for the
    /// launch; the polling loop never starts.
    fn session_start(&self, identity: &GameIdentity) -> Result<()>;

    /// Lightweight per-tick memory refresh, no scripted evaluation.
    fn update_memory(&self);

    /// Full per-tick evaluation. Failures inside are the engine's own
    /// concern and never stop the polling loop.
    fn run_tick(&self);

    /// Close notification when the application ends.
    fn close_session(&self);
}
