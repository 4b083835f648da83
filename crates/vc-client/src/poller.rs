//! Polling task
//!
//! One background thread per launch: it waits for the emulator core to
//! finish booting, locates the guest's memory, starts the external session,
//! then ticks forever at the frame cadence, consulting the gate each tick.
//! There is no graceful stop; the task lives until the application ends.

use crate::engine::{Engine, GameIdentity};
use crate::frontend::Frontend;
use crate::gate::{Gate, TickAction};
use crate::host::Host;
use crate::session::Session;
use std::sync::Arc;
use std::time::Duration;
use vc_core::{ByteOrder, Severity, SyncMethod};
use vc_memory::{locate, AddressSpace, GuestRegion};
use vc_title::TitleInfo;

/// Name the polling thread registers with the OS.
pub const THREAD_NAME: &str = "vclive client";

/// Thread stack size. Tuning parameter only; the task is shallow.
pub const STACK_SIZE: usize = 0x30000;

/// Timing knobs for the task. Injectable so tests and the harness don't
/// wait out the real boot settle.
#[derive(Debug, Clone)]
pub struct Timing {
    /// Wait before the one-shot scan, long enough for emulator cores to
    /// finish their own boot sequence. Tuned against N64 cores.
    pub settle_delay: Duration,
    /// Fixed tick period matched to the nominal 60 Hz frame rate.
    pub tick_period: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_secs(10),
            tick_period: Duration::from_nanos(16_666_667),
        }
    }
}

pub struct Poller {
    host: Arc<dyn Host>,
    engine: Arc<dyn Engine>,
    frontend: Arc<dyn Frontend>,
    session: Arc<Session>,
    gate: Arc<Gate>,
    sync_method: SyncMethod,
    timing: Timing,
}

impl Poller {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        host: Arc<dyn Host>,
        engine: Arc<dyn Engine>,
        frontend: Arc<dyn Frontend>,
        session: Arc<Session>,
        gate: Arc<Gate>,
        sync_method: SyncMethod,
        timing: Timing,
    ) -> Self {
        Self {
            host,
            engine,
            frontend,
            session,
            gate,
            sync_method,
            timing,
        }
    }

    /// Thread body. Returns when the session could not be established;
    /// otherwise loops until the process ends.
    pub fn run(self) {
        std::thread::sleep(self.timing.settle_delay);

        if !self.establish_session() {
            return;
        }

        loop {
            self.pace();
            self.tick();
        }
    }

    /// One-shot classification follow-up: locate the region, build the
    /// identity payload and start the external session. Any failure here
    /// is terminal for the launch.
    pub fn establish_session(&self) -> bool {
        let Some(title) = self.session.title() else {
            // Spawned without a launch recorded; nothing to do.
            return false;
        };

        let space = self.host.address_space();
        let Some(region) = locate(title.platform, self.host.foreground_arena(), &*space) else {
            tracing::warn!("No guest memory region found for {}", title.platform);
            self.frontend.display_message(
                Severity::Error,
                &format!("Could not initialize {} game.", title.platform),
            );
            return false;
        };

        let Some(identity) = self.build_identity(&title, &region, &*space) else {
            return false;
        };

        if let Err(e) = self.engine.session_start(&identity) {
            self.frontend
                .display_message(Severity::Error, &format!("Session start error: {}", e));
            return false;
        }

        tracing::info!(
            "Session started for '{}' via {} at 0x{:08X}",
            identity.title(),
            region.origin,
            region.host_base
        );
        self.session.set_region(region);
        self.session.mark_started();
        true
    }

    fn build_identity(
        &self,
        title: &TitleInfo,
        region: &GuestRegion,
        space: &dyn AddressSpace,
    ) -> Option<GameIdentity> {
        if title.platform.is_emulated() {
            let mut data = vec![0u8; region.size as usize];
            if !space.read_bytes(region.host_base, &mut data) {
                self.frontend.display_message(
                    Severity::Error,
                    "Guest memory became unreadable during identification.",
                );
                return None;
            }
            Some(GameIdentity::FileHash {
                library: title.platform.library_name(),
                title: title.display_name(),
                data,
            })
        } else {
            Some(GameIdentity::ProductCode {
                library: title.platform.library_name(),
                title: title.display_name(),
                product: format!("{:016X}", title.id),
                version: title.version.to_string(),
            })
        }
    }

    /// Block until the next tick boundary.
    fn pace(&self) {
        match self.sync_method {
            SyncMethod::FixedTick => std::thread::sleep(self.timing.tick_period),
            SyncMethod::VerticalSync => self.host.wait_vsync(),
        }
    }

    /// One tick of the loop.
    pub fn tick(&self) {
        match self.gate.begin_tick(self.session.is_fatal()) {
            TickAction::Skip => {}
            TickAction::UpdateOnly => self.engine.update_memory(),
            TickAction::Run => {
                if let Some(title) = self.session.title() {
                    let order = title.platform.byte_order();
                    if order != ByteOrder::HOST {
                        self.session.reassert_byte_order(order);
                    }
                }
                self.engine.run_tick();
            }
        }
    }
}
