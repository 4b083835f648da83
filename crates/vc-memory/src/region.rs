//! Guest memory region descriptors

use vc_core::ByteOrder;

/// A contiguous, directly addressable span believed to hold the guest
/// program's working memory.
///
/// Created at most once per application launch by the region locator and
/// read-only afterwards, apart from the per-tick byte-order reassertion
/// the polling task performs for little-endian guests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestRegion {
    /// Address of the span in the host's address space.
    pub host_base: u64,
    /// Address the guest program itself uses for this memory.
    pub guest_base: u64,
    /// Span length in bytes; always nonzero.
    pub size: u64,
    /// Human-readable provenance (which arena or signature matched).
    pub origin: &'static str,
    /// Byte order of the data in the span.
    pub byte_order: ByteOrder,
}

/// Host-provided memory arena for native titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    pub base: u64,
    pub size: u64,
}

impl Arena {
    /// An arena the host reported as empty carries no usable memory.
    pub fn is_usable(&self) -> bool {
        self.base != 0 && self.size != 0
    }
}
