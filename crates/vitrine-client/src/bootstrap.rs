//! Client singleton bootstrap
//!
//! Owns the one process-wide slot through which the rest of the host obtains
//! the backend client handle. The slot starts `Absent`; the first successful
//! factory call moves it to `Present`, fires the readiness event, and every
//! later call is a pure read of the cached handle. Failure is not a state of
//! its own - it leaves the slot `Absent` and eligible for another attempt.

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::config::Credentials;
use crate::error::ClientError;
use crate::ready::{ReadyNotifier, ReadySignal};
use crate::retry::PollConfig;
use crate::sdk::{ClientFactory, ClientHandle, SdkSlot};

enum HandleState {
    Absent,
    Present(ClientHandle),
}

/// Lazy singleton holder for the backend client.
pub struct ClientBootstrap {
    credentials: Credentials,
    poll: PollConfig,
    sdk: SdkSlot,
    handle: Mutex<HandleState>,
    ready: ReadyNotifier,
}

impl ClientBootstrap {
    /// Create a bootstrap with the default poll budget.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self::with_poll_config(credentials, PollConfig::default())
    }

    /// Create a bootstrap with an explicit poll budget.
    #[must_use]
    pub fn with_poll_config(credentials: Credentials, poll: PollConfig) -> Self {
        Self {
            credentials,
            poll,
            sdk: SdkSlot::new(),
            handle: Mutex::new(HandleState::Absent),
            ready: ReadyNotifier::new(),
        }
    }

    /// The credentials this bootstrap constructs clients with.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Announce that the SDK has loaded. A registered factory is the only
    /// availability signal the bootstrap checks.
    pub fn register_sdk(&self, factory: Arc<dyn ClientFactory>) {
        self.sdk.register(factory);
    }

    /// Whether the SDK factory has been registered.
    #[must_use]
    pub fn sdk_available(&self) -> bool {
        self.sdk.is_available()
    }

    /// Whether the client handle has been created.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(
            *self.handle.lock().expect("client slot lock poisoned"),
            HandleState::Present(_)
        )
    }

    /// Subscribe to the one-shot readiness event.
    ///
    /// Subscriptions taken after the event has fired are never resolved;
    /// late code polls [`ClientBootstrap::get_client`] instead.
    pub fn subscribe_ready(&self) -> ReadySignal {
        self.ready.subscribe()
    }

    /// Ensure the client exists, making at most one creation attempt.
    ///
    /// Returns the cached handle when present. Otherwise, if the SDK factory
    /// is registered, invokes it once: on success the handle is cached, the
    /// readiness event fires, and the handle is returned; on failure the
    /// slot stays absent and `None` is returned. With no factory registered
    /// this returns `None` without side effects.
    pub fn ensure_client(&self) -> Option<ClientHandle> {
        self.attempt().ok()
    }

    /// Caller-facing accessor: the cached handle, or the outcome of one
    /// on-demand creation attempt. No retry budget of its own - each call is
    /// a single attempt, repeatable indefinitely.
    pub fn get_client(&self) -> Option<ClientHandle> {
        self.ensure_client()
    }

    /// Start the bounded automatic initialization task.
    ///
    /// The task makes its first attempt immediately, then re-polls at the
    /// configured interval while the SDK factory is unavailable. Exhausting
    /// the budget logs a terminal failure exactly once and ends the task;
    /// the accessor path stays usable afterwards. A factory call that fails
    /// outright also ends the task - only unavailability consumes budget.
    pub fn spawn_auto_init(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(self.auto_init())
    }

    async fn auto_init(self: Arc<Self>) {
        let PollConfig {
            max_polls,
            interval,
        } = self.poll;

        for poll in 1..=max_polls {
            match self.attempt() {
                Ok(_) => return,
                Err(ClientError::SdkUnavailable) => {
                    debug!(poll, max_polls, "backend SDK not yet available");
                    if poll < max_polls {
                        sleep(interval).await;
                    }
                }
                // Already logged by the attempt; the slot stays absent for
                // on-demand calls.
                Err(_) => return,
            }
        }

        error!(
            polls = max_polls,
            "backend SDK never became available, giving up on automatic initialization"
        );
    }

    /// One run-to-completion attempt. The factory call happens under the
    /// slot lock, so two interleaved attempts can never both create a
    /// client.
    fn attempt(&self) -> Result<ClientHandle, ClientError> {
        let mut slot = self.handle.lock().expect("client slot lock poisoned");

        if let HandleState::Present(handle) = &*slot {
            return Ok(handle.clone());
        }

        let factory = self.sdk.factory().ok_or(ClientError::SdkUnavailable)?;

        match factory.create_client(&self.credentials) {
            Ok(handle) => {
                *slot = HandleState::Present(handle.clone());
                drop(slot);
                self.ready.notify();
                info!("backend client initialized");
                Ok(handle)
            }
            Err(err) => {
                warn!(error = %err, "backend client factory failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug)]
    struct FakeClient(u32);

    impl crate::sdk::BackendClient for FakeClient {}

    struct CountingFactory {
        calls: AtomicU32,
        fail_first: u32,
    }

    impl CountingFactory {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicU32::new(0),
                fail_first: 0,
            })
        }

        fn failing_first(n: u32) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicU32::new(0),
                fail_first: n,
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ClientFactory for CountingFactory {
        fn create_client(&self, _credentials: &Credentials) -> Result<ClientHandle, ClientError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_first {
                return Err(ClientError::factory("sdk not ready"));
            }
            Ok(Arc::new(FakeClient(call)))
        }
    }

    fn credentials() -> Credentials {
        Credentials::new("https://backend.example.com", "anon-key").unwrap()
    }

    #[test]
    fn test_no_attempt_without_factory() {
        let bootstrap = ClientBootstrap::new(credentials());

        assert!(bootstrap.ensure_client().is_none());
        assert!(bootstrap.get_client().is_none());
        assert!(!bootstrap.is_ready());
    }

    #[test]
    fn test_factory_invoked_once_across_calls() {
        let bootstrap = ClientBootstrap::new(credentials());
        let factory = CountingFactory::new();
        bootstrap.register_sdk(factory.clone());

        let first = bootstrap.ensure_client().expect("client created");
        for _ in 0..10 {
            let again = bootstrap.get_client().expect("cached client");
            assert!(Arc::ptr_eq(&first, &again));
        }

        assert_eq!(factory.calls(), 1);
        assert!(bootstrap.is_ready());
    }

    #[test]
    fn test_failure_leaves_slot_absent() {
        let bootstrap = ClientBootstrap::new(credentials());
        let factory = CountingFactory::failing_first(2);
        bootstrap.register_sdk(factory.clone());

        assert!(bootstrap.get_client().is_none());
        assert!(!bootstrap.is_ready());
        assert!(bootstrap.get_client().is_none());

        // Third attempt succeeds; the slot becomes present for good.
        let handle = bootstrap.get_client().expect("client created");
        assert_eq!(factory.calls(), 3);
        assert!(Arc::ptr_eq(&handle, &bootstrap.get_client().unwrap()));
        assert_eq!(factory.calls(), 3);
    }

    #[tokio::test]
    async fn test_ready_fires_on_first_success_only() {
        let bootstrap = ClientBootstrap::new(credentials());
        let signal = bootstrap.subscribe_ready();

        bootstrap.register_sdk(CountingFactory::new());
        bootstrap.ensure_client().expect("client created");

        signal.wait().await;

        // The event does not replay for late subscribers.
        assert!(!bootstrap.subscribe_ready().is_live());
    }

    #[test]
    fn test_concurrent_callers_share_one_handle() {
        let bootstrap = Arc::new(ClientBootstrap::new(credentials()));
        let factory = CountingFactory::new();
        bootstrap.register_sdk(factory.clone());

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let bootstrap = bootstrap.clone();
                std::thread::spawn(move || bootstrap.ensure_client().expect("client created"))
            })
            .collect();
        let handles: Vec<_> = threads
            .into_iter()
            .map(|t| t.join().expect("caller thread panicked"))
            .collect();

        assert_eq!(factory.calls(), 1);
        for handle in &handles {
            assert!(Arc::ptr_eq(handle, &handles[0]));
        }
    }
}
