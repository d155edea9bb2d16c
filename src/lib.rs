//! Receiver for Nylas webhook notifications.
//!
//! Answers the provider's challenge handshake, authenticates each delivery
//! with an HMAC-SHA256 signature, and keeps the normalized events in memory
//! for display.

pub mod config;
pub mod error;
pub mod http_server;
pub mod normalize;
pub mod store;
pub mod types;
pub mod verification;
pub mod view;

pub use config::Config;
pub use error::{ConfigError, WebhookError};
pub use http_server::{build_router, AppState};
pub use store::EventStore;
pub use types::WebhookEvent;
