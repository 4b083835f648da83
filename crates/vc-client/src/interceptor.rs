//! Host log interception
//!
//! The host's plugin loader routes its logging entry point through our
//! hook. Each formatted line is scanned for the current platform's
//! shell-menu markers while a session is active, then always forwarded
//! unmodified to the real sink, preserving order.

use crate::frontend::Frontend;
use crate::gate::Gate;
use crate::session::Session;
use std::sync::Arc;
use vc_core::Severity;

/// The real destination for log lines.
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str);
}

pub struct LogInterceptor {
    gate: Arc<Gate>,
    session: Arc<Session>,
    frontend: Arc<dyn Frontend>,
    sink: Arc<dyn LogSink>,
}

impl LogInterceptor {
    pub fn new(
        gate: Arc<Gate>,
        session: Arc<Session>,
        frontend: Arc<dyn Frontend>,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            gate,
            session,
            frontend,
            sink,
        }
    }

    /// Handle one line the host was about to log.
    pub fn intercept(&self, line: &str) {
        // Marker scanning is skipped without an active session; this is
        // cost avoidance, forwarding below happens regardless.
        if self.session.is_started() {
            if let Some(title) = self.session.title() {
                if let Some((open, close)) = title.platform.shell_menu_markers() {
                    if line.contains(open) {
                        self.frontend
                            .display_message(Severity::Debug, "Shell menu opened. Pausing.");
                        self.gate.on_shell_menu_opened();
                    } else if line.contains(close) {
                        self.frontend
                            .display_message(Severity::Debug, "Shell menu closed. Unpausing.");
                        self.gate.on_shell_menu_closed();
                    }
                }
            }
        }

        self.sink.write_line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::TracingFrontend;
    use parking_lot::Mutex;
    use vc_title::TitleInfo;

    #[derive(Default)]
    struct CaptureSink {
        lines: Mutex<Vec<String>>,
    }

    impl LogSink for CaptureSink {
        fn write_line(&self, line: &str) {
            self.lines.lock().push(line.to_string());
        }
    }

    fn n64_session() -> Arc<Session> {
        let session = Arc::new(Session::new());
        session.begin(TitleInfo::new(0x0005_0000_1019_9500, "Test", 0));
        session.mark_started();
        session
    }

    fn interceptor(session: Arc<Session>) -> (LogInterceptor, Arc<Gate>, Arc<CaptureSink>) {
        let gate = Arc::new(Gate::new());
        let sink = Arc::new(CaptureSink::default());
        let it = LogInterceptor::new(
            gate.clone(),
            session,
            Arc::new(TracingFrontend),
            sink.clone(),
        );
        (it, gate, sink)
    }

    #[test]
    fn test_markers_toggle_gate() {
        let (it, gate, _) = interceptor(n64_session());

        it.intercept("osd: trlEmuShellMenuOpen requested");
        assert!(gate.is_paused());

        it.intercept("osd: trlEmuShellMenuClose done");
        assert!(!gate.is_paused());
        assert_eq!(gate.catch_up_frames(), crate::gate::SETTLE_FRAMES);
    }

    #[test]
    fn test_lines_always_forwarded_in_order() {
        let (it, _, sink) = interceptor(n64_session());

        it.intercept("first");
        it.intercept("trlEmuShellMenuOpen");
        it.intercept("last");

        let lines = sink.lines.lock();
        assert_eq!(*lines, vec!["first", "trlEmuShellMenuOpen", "last"]);
    }

    #[test]
    fn test_no_session_is_passthrough() {
        let session = Arc::new(Session::new());
        let (it, gate, sink) = interceptor(session);

        it.intercept("trlEmuShellMenuOpen");
        assert!(!gate.is_paused());
        assert_eq!(sink.lines.lock().len(), 1);
    }

    #[test]
    fn test_platform_without_markers_is_passthrough() {
        let session = Arc::new(Session::new());
        // Native title: no shell-menu markers defined.
        session.begin(TitleInfo::new(0x0005_0000_1234_5600, "Native", 0));
        session.mark_started();
        let (it, gate, sink) = interceptor(session);

        it.intercept("trlEmuShellMenuOpen");
        assert!(!gate.is_paused());
        assert_eq!(sink.lines.lock().len(), 1);
    }
}
