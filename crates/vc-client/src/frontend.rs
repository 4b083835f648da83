//! User notification frontend

use vc_core::Severity;

/// Collaborator that renders user-facing notifications (toasts/banners on
/// a real host).
pub trait Frontend: Send + Sync {
    fn display_message(&self, severity: Severity, text: &str);
}

/// Frontend that routes notifications into the tracing subscriber. Used by
/// the harness and wherever no richer renderer is wired up.
#[derive(Debug, Default)]
pub struct TracingFrontend;

impl Frontend for TracingFrontend {
    fn display_message(&self, severity: Severity, text: &str) {
        match severity {
            Severity::Info => tracing::info!("{}", text),
            Severity::Warn => tracing::warn!("{}", text),
            Severity::Error => tracing::error!("{}", text),
            Severity::Debug => tracing::debug!("{}", text),
        }
    }
}
