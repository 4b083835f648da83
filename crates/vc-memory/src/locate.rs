//! Region locator
//!
//! For native titles the host's foreground arena is wrapped directly. For
//! Virtual Console titles the emulator core maps the guest ROM somewhere in
//! a fixed host address window; that window is scanned word-by-word for the
//! platform's magic signature, and a size field at a fixed offset from the
//! match validates the candidate. Scans are bounded by an explicit upper
//! address so they terminate even when no signature exists.

use crate::region::{Arena, GuestRegion};
use crate::space::AddressSpace;
use vc_core::ByteOrder;
use vc_title::Platform;

/// Parameters of a signature scan for one platform.
#[derive(Debug, Clone, Copy)]
pub struct ScanSpec {
    /// First host address scanned (inclusive).
    pub start: u64,
    /// Upper bound of the scan (exclusive).
    pub end: u64,
    /// Magic word marking a candidate.
    pub magic: u32,
    /// Byte offset from the match to the size field.
    pub size_offset: i64,
    /// Byte offset from the match to the start of the region.
    pub data_offset: i64,
    /// Largest plausible region; candidates above this are rejected.
    pub max_size: u64,
    /// Address the guest uses for the region.
    pub guest_base: u64,
    /// Provenance label for the descriptor.
    pub origin: &'static str,
    /// Byte order forced onto the descriptor.
    pub byte_order: ByteOrder,
}

/// N64 cores map the cartridge into this window. The magic is the first
/// word of the ROM header; the core stashes the ROM size 0x10 bytes ahead
/// of it. Largest released cartridge is 64 MiB.
const N64_SCAN: ScanSpec = ScanSpec {
    start: 0x1400_0000,
    end: 0x2000_0000,
    magic: 0x8037_1240,
    size_offset: -0x10,
    data_offset: 0,
    max_size: 0x0400_0000,
    guest_base: 0x1000_0000,
    origin: "N64 ROM header",
    byte_order: ByteOrder::Big,
};

/// NDS cores keep the ROM image in this window. The magic is the first
/// word of the encoded logo, 0xC0 bytes into the header; size sits one
/// word before the header.
const NDS_SCAN: ScanSpec = ScanSpec {
    start: 0x2A80_0000,
    end: 0x2B40_0000,
    magic: 0x24FF_AE51,
    size_offset: -0xD0,
    data_offset: -0xC0,
    max_size: 0x2000_0000,
    guest_base: 0,
    origin: "NDS logo signature",
    byte_order: ByteOrder::Little,
};

impl ScanSpec {
    /// The built-in scan for a platform, if it has one.
    pub fn for_platform(platform: Platform) -> Option<Self> {
        match platform {
            Platform::N64 => Some(N64_SCAN),
            Platform::Nds => Some(NDS_SCAN),
            _ => None,
        }
    }
}

/// Locate the guest's working memory for a launch.
///
/// Returns `None` when no arena or signature is found; that is a normal
/// "could not establish a region" outcome for the launch, not an error.
pub fn locate(
    platform: Platform,
    arena: Option<Arena>,
    space: &dyn AddressSpace,
) -> Option<GuestRegion> {
    if platform == Platform::WiiU {
        let arena = arena.filter(Arena::is_usable)?;
        tracing::debug!(
            "Using foreground arena at 0x{:08X} ({} bytes)",
            arena.base,
            arena.size
        );
        return Some(GuestRegion {
            host_base: arena.base,
            guest_base: arena.base,
            size: arena.size,
            origin: "foreground bucket",
            byte_order: ByteOrder::HOST,
        });
    }

    let spec = ScanSpec::for_platform(platform)?;
    scan(&spec, space)
}

/// Scan a window for a signature per `spec`.
///
/// Candidates with a zero size field, an implausibly large size field, or
/// a size field that falls outside the view are rejected and the scan
/// continues past them. The first accepted candidate wins.
pub fn scan(spec: &ScanSpec, space: &dyn AddressSpace) -> Option<GuestRegion> {
    let mut addr = spec.start;
    while addr < spec.end {
        if space.read_u32(addr) == Some(spec.magic) {
            if let Some(region) = check_candidate(spec, space, addr) {
                return Some(region);
            }
        }
        addr += 4;
    }
    None
}

fn check_candidate(spec: &ScanSpec, space: &dyn AddressSpace, addr: u64) -> Option<GuestRegion> {
    let size_addr = addr.checked_add_signed(spec.size_offset)?;
    let host_base = addr.checked_add_signed(spec.data_offset)?;

    let size = space.read_u32(size_addr)? as u64;
    if size == 0 || size > spec.max_size {
        tracing::trace!(
            "Rejected candidate at 0x{:08X}: size 0x{:X}",
            addr,
            size
        );
        return None;
    }

    tracing::debug!(
        "{} matched at 0x{:08X}, region 0x{:08X} ({} bytes)",
        spec.origin,
        addr,
        host_base,
        size
    );

    Some(GuestRegion {
        host_base,
        guest_base: spec.guest_base,
        size,
        origin: spec.origin,
        byte_order: spec.byte_order,
    })
}
