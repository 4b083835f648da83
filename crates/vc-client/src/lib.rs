//! Session client for vclive
//!
//! Ties the title classifier and region locator to the host's lifecycle:
//! a dedicated polling thread paces itself to the frame cadence and drives
//! the external session engine, while foreground transitions and
//! intercepted log lines gate it through pause and catch-up states.

pub mod client;
pub mod engine;
pub mod frontend;
pub mod gate;
pub mod host;
pub mod interceptor;
pub mod network;
pub mod poller;
pub mod session;

pub use client::Client;
pub use engine::{Engine, GameIdentity};
pub use frontend::{Frontend, TracingFrontend};
pub use gate::{Gate, TickAction, SETTLE_FRAMES};
pub use host::{Host, TitleMeta};
pub use interceptor::{LogInterceptor, LogSink};
pub use network::{HttpPoster, NetworkPost, SERVICE_URL, USER_AGENT};
pub use poller::{Poller, Timing};
pub use session::Session;
