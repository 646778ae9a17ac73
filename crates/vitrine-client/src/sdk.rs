//! SDK factory seam
//!
//! The backend SDK is an external dependency. This module defines the seam
//! the bootstrap works against: an opaque client handle, the factory that
//! produces it, and the slot through which the host announces that the SDK
//! has been loaded.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::config::Credentials;
use crate::error::ClientError;

/// Opaque backend client. The bootstrap never looks inside.
pub trait BackendClient: Send + Sync + fmt::Debug {}

/// Shared handle to the backend client.
pub type ClientHandle = Arc<dyn BackendClient>;

/// The SDK's client factory.
///
/// Calls are synchronous and non-blocking; a factory that fails leaves the
/// bootstrap free to attempt again later.
pub trait ClientFactory: Send + Sync {
    /// Create a client from the given credentials.
    fn create_client(&self, credentials: &Credentials) -> Result<ClientHandle, ClientError>;
}

/// Registration slot for the SDK factory.
///
/// Empty until the host registers a factory; a registered factory is the
/// only availability signal the bootstrap checks.
pub(crate) struct SdkSlot {
    factory: Mutex<Option<Arc<dyn ClientFactory>>>,
}

impl SdkSlot {
    pub(crate) fn new() -> Self {
        Self {
            factory: Mutex::new(None),
        }
    }

    pub(crate) fn register(&self, factory: Arc<dyn ClientFactory>) {
        let mut slot = self.factory.lock().expect("sdk slot lock poisoned");
        *slot = Some(factory);
    }

    pub(crate) fn factory(&self) -> Option<Arc<dyn ClientFactory>> {
        self.factory
            .lock()
            .expect("sdk slot lock poisoned")
            .clone()
    }

    pub(crate) fn is_available(&self) -> bool {
        self.factory
            .lock()
            .expect("sdk slot lock poisoned")
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FakeClient;

    impl BackendClient for FakeClient {}

    struct FakeFactory;

    impl ClientFactory for FakeFactory {
        fn create_client(&self, _credentials: &Credentials) -> Result<ClientHandle, ClientError> {
            Ok(Arc::new(FakeClient))
        }
    }

    #[test]
    fn test_slot_starts_empty() {
        let slot = SdkSlot::new();
        assert!(!slot.is_available());
        assert!(slot.factory().is_none());
    }

    #[test]
    fn test_registration_flips_availability() {
        let slot = SdkSlot::new();
        slot.register(Arc::new(FakeFactory));
        assert!(slot.is_available());
        assert!(slot.factory().is_some());
    }
}
