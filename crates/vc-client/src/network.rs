//! Service network poster
//!
//! The session engine drives network traffic; this module only supplies
//! the transport. POSTs are synchronous with a buffered response body, as
//! the engine expects.

use crate::frontend::Frontend;
use std::sync::Arc;
use vc_core::{ClientError, Result, Severity};

/// Endpoint the session engine posts its requests to.
pub const SERVICE_URL: &str = "https://api.vclive.net/request";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("vclive/", env!("CARGO_PKG_VERSION"));

/// Transport seam the engine posts through.
pub trait NetworkPost: Send + Sync {
    fn post(&self, payload: &str) -> Result<String>;
}

/// Blocking HTTP transport for the service.
pub struct HttpPoster {
    client: reqwest::blocking::Client,
    url: String,
    frontend: Arc<dyn Frontend>,
    /// Mirror each response body as an Info notification.
    notify_responses: bool,
}

impl HttpPoster {
    pub fn new(url: &str, frontend: Arc<dyn Frontend>, notify_responses: bool) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
            frontend,
            notify_responses,
        })
    }
}

impl NetworkPost for HttpPoster {
    fn post(&self, payload: &str) -> Result<String> {
        let result = self
            .client
            .post(&self.url)
            .body(payload.to_string())
            .send()
            .and_then(|response| response.text());

        match result {
            Ok(body) => {
                if self.notify_responses {
                    self.frontend.display_message(Severity::Info, &body);
                }
                Ok(body)
            }
            Err(e) => {
                let code = e.status().map(|s| s.as_u16()).unwrap_or(0);
                self.frontend
                    .display_message(Severity::Error, &format!("Error {:03}", code));
                Err(ClientError::Network(e.to_string()))
            }
        }
    }
}
