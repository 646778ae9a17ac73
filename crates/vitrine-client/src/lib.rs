//! Vitrine client - backend bootstrap for site consumers
//!
//! Lazily initializes the shared backend client handle: polls for the SDK
//! factory with a bounded budget, caches the handle on first success, and
//! broadcasts a one-shot readiness event.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod ready;
pub mod remote;
pub mod retry;
pub mod sdk;

pub use bootstrap::ClientBootstrap;
pub use config::Credentials;
pub use error::ClientError;
pub use ready::{ReadyNotifier, ReadySignal};
pub use remote::fetch_credentials;
pub use retry::PollConfig;
pub use sdk::{BackendClient, ClientFactory, ClientHandle};
