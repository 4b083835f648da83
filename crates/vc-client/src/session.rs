//! Per-launch session context
//!
//! Replaces ambient globals: one `Session` is constructed with the client
//! and shared by reference with the polling task, the log interceptor and
//! the lifecycle callbacks. Title and region follow a write-once-then-read
//! discipline; the started and fatal flags are plain atomics.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use vc_core::ByteOrder;
use vc_memory::GuestRegion;
use vc_title::TitleInfo;

#[derive(Debug, Default)]
pub struct Session {
    /// Identity of the running title; written at application start.
    title: RwLock<Option<TitleInfo>>,
    /// Guest memory region; written once by the polling task before its
    /// tick loop begins.
    region: RwLock<Option<GuestRegion>>,
    /// Whether the external session was established for this launch.
    started: AtomicBool,
    /// Set once by subsystem-init failures; treated like paused each tick.
    fatal: AtomicBool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the title identity for a new launch.
    pub fn begin(&self, title: TitleInfo) {
        *self.title.write() = Some(title);
        *self.region.write() = None;
        self.started.store(false, Ordering::SeqCst);
    }

    /// Clear all launch state. The fatal flag survives; it belongs to the
    /// process, not the launch.
    pub fn end(&self) {
        *self.title.write() = None;
        *self.region.write() = None;
        self.started.store(false, Ordering::SeqCst);
    }

    pub fn title(&self) -> Option<TitleInfo> {
        self.title.read().clone()
    }

    pub fn set_region(&self, region: GuestRegion) {
        *self.region.write() = Some(region);
    }

    pub fn region(&self) -> Option<GuestRegion> {
        self.region.read().clone()
    }

    /// Force the region's byte order. Called each normal tick for guests
    /// whose order differs from the host's, guarding against the
    /// descriptor being reset by other activity.
    pub fn reassert_byte_order(&self, order: ByteOrder) {
        if let Some(region) = self.region.write().as_mut() {
            region.byte_order = order;
        }
    }

    pub fn mark_started(&self) {
        self.started.store(true, Ordering::SeqCst);
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    pub fn set_fatal(&self) {
        self.fatal.store(true, Ordering::SeqCst);
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal.load(Ordering::SeqCst)
    }
}
