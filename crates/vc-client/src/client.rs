//! Client lifecycle
//!
//! Entry points the host's plugin loader calls: application start/end,
//! foreground transitions, and the log hook. The client owns the shared
//! session context and gate, and spawns the polling thread for supported
//! titles.

use crate::engine::Engine;
use crate::frontend::Frontend;
use crate::gate::Gate;
use crate::host::Host;
use crate::interceptor::{LogInterceptor, LogSink};
use crate::network::{HttpPoster, NetworkPost, SERVICE_URL};
use crate::poller::{Poller, Timing, STACK_SIZE, THREAD_NAME};
use crate::session::Session;
use std::sync::Arc;
use vc_core::{Settings, Severity};
use vc_title::{TitleInfo, TitleType};

pub struct Client {
    host: Arc<dyn Host>,
    engine: Arc<dyn Engine>,
    frontend: Arc<dyn Frontend>,
    settings: Settings,
    session: Arc<Session>,
    gate: Arc<Gate>,
    timing: Timing,
    network: Option<Arc<HttpPoster>>,
}

impl Client {
    /// Initialize the client. Subsystem failures here (network transport)
    /// mark the session fatal: the feature stays inert but never crashes
    /// the host.
    pub fn new(
        host: Arc<dyn Host>,
        engine: Arc<dyn Engine>,
        frontend: Arc<dyn Frontend>,
        settings: Settings,
    ) -> Self {
        let session = Arc::new(Session::new());
        let gate = Arc::new(Gate::new());

        let network = match HttpPoster::new(
            SERVICE_URL,
            frontend.clone(),
            settings.network_notifications,
        ) {
            Ok(poster) => Some(Arc::new(poster)),
            Err(e) => {
                tracing::error!("Network transport init failed: {}", e);
                frontend.display_message(Severity::Error, "Could not initialize network.");
                session.set_fatal();
                None
            }
        };

        Self {
            host,
            engine,
            frontend,
            settings,
            session,
            gate,
            timing: Timing::default(),
            network,
        }
    }

    /// Override the polling timing (harness and tests).
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn gate(&self) -> &Arc<Gate> {
        &self.gate
    }

    /// Transport for the session engine, if it initialized.
    pub fn network(&self) -> Option<Arc<dyn NetworkPost>> {
        self.network
            .clone()
            .map(|poster| poster as Arc<dyn NetworkPost>)
    }

    /// Build the log hook for the host's logging entry point.
    pub fn interceptor(&self, sink: Arc<dyn LogSink>) -> LogInterceptor {
        LogInterceptor::new(
            self.gate.clone(),
            self.session.clone(),
            self.frontend.clone(),
            sink,
        )
    }

    /// An application launched. Classify it and, for supported platforms,
    /// start the polling thread.
    pub fn on_application_start(&self) {
        if !self.settings.enabled || self.session.is_fatal() {
            return;
        }

        self.gate.reset();

        let id = self.host.title_id();
        let meta = self.host.title_meta();
        let title = TitleInfo::new(id, &meta.name, meta.version);

        // Only disc or eShop games are supported.
        if title.title_type != TitleType::Game {
            tracing::debug!("Ignoring non-game title {:016X}", id);
            return;
        }
        if !title.platform.supports_polling() {
            tracing::debug!("Unsupported title system: {}", title.platform);
            return;
        }

        tracing::info!(
            "Title {:016X} classified as {} ('{}')",
            id,
            title.platform,
            title.display_name()
        );
        self.session.begin(title);

        let poller = Poller::new(
            self.host.clone(),
            self.engine.clone(),
            self.frontend.clone(),
            self.session.clone(),
            self.gate.clone(),
            self.settings.sync_method,
            self.timing.clone(),
        );

        let spawned = std::thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .stack_size(STACK_SIZE)
            .spawn(move || poller.run());

        if let Err(e) = spawned {
            tracing::error!("Failed to spawn polling thread: {}", e);
            self.frontend
                .display_message(Severity::Error, "Main thread error");
            self.session.end();
        }
    }

    /// The application is ending. Close the session if one was
    /// established; the polling thread is not joined.
    pub fn on_application_end(&self) {
        if self.session.is_started() {
            self.engine.close_session();
        }
        self.session.end();
        self.gate.reset();
    }

    /// Host regained the foreground (HOME menu closed).
    pub fn on_foreground_acquired(&self) {
        self.gate.on_foreground_acquired();
    }

    /// Host released the foreground (HOME menu opened). Only meaningful
    /// while a session is active.
    pub fn on_foreground_released(&self) {
        if self.session.is_started() {
            self.gate.on_foreground_released();
        }
    }
}
