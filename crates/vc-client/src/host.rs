//! Host interface
//!
//! The host delivers title identity and metadata, the foreground arena for
//! native titles, a vertical-sync wait, and an address space to read guest
//! memory through. A real deployment implements this against the console
//! OS; the harness and tests implement it over simulated memory.

use std::sync::Arc;
use vc_memory::{AddressSpace, Arena};

/// Title metadata from the host's metadata store.
#[derive(Debug, Clone, Default)]
pub struct TitleMeta {
    /// Raw display name; sanitized before use.
    pub name: String,
    /// Title version number.
    pub version: u32,
}

pub trait Host: Send + Sync {
    /// Title id of the running application.
    fn title_id(&self) -> u64;

    /// Metadata for the running title. Hosts that cannot resolve metadata
    /// return an empty name; display names fall back per platform.
    fn title_meta(&self) -> TitleMeta;

    /// The foreground memory arena, if the host reports one.
    fn foreground_arena(&self) -> Option<Arena>;

    /// Block until the next vertical sync.
    fn wait_vsync(&self);

    /// Bounded view over the host's address space.
    fn address_space(&self) -> Arc<dyn AddressSpace>;
}
