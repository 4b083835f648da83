//! Guest memory discovery for vclive
//!
//! Provides the bounded view over host memory that the rest of the client
//! reads through, and the region locator that finds the guest program's
//! working memory: a foreground-arena query for native titles, a bounded
//! signature scan for Virtual Console titles.

pub mod locate;
pub mod region;
pub mod space;

pub use locate::{locate, scan, ScanSpec};
pub use region::{Arena, GuestRegion};
pub use space::{AddressSpace, SliceSpace};
