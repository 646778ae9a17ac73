//! One-shot readiness broadcast
//!
//! Fires the first (and only) time the client handle is created. Waiters
//! subscribed before the event are drained on fire; a subscriber that
//! arrives afterwards is not replayed the event and must poll the accessor
//! instead. The fired flag is persisted so late code can tell which side of
//! the event it is on.

use std::sync::Mutex;

use tokio::sync::oneshot;

/// One-shot broadcast of the "client ready" event.
pub struct ReadyNotifier {
    inner: Mutex<Inner>,
}

struct Inner {
    fired: bool,
    waiters: Vec<oneshot::Sender<()>>,
}

impl ReadyNotifier {
    /// Create a notifier that has not fired.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                fired: false,
                waiters: Vec::new(),
            }),
        }
    }

    /// Subscribe to the event.
    ///
    /// A signal obtained after the event has fired never resolves.
    pub fn subscribe(&self) -> ReadySignal {
        let mut inner = self.inner.lock().expect("ready notifier lock poisoned");
        if inner.fired {
            return ReadySignal(None);
        }

        let (tx, rx) = oneshot::channel();
        inner.waiters.push(tx);
        ReadySignal(Some(rx))
    }

    /// Whether the event has fired.
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.inner
            .lock()
            .expect("ready notifier lock poisoned")
            .fired
    }

    /// Fire the event, draining all current waiters. Idempotent; only the
    /// first call broadcasts.
    pub fn notify(&self) {
        let waiters = {
            let mut inner = self.inner.lock().expect("ready notifier lock poisoned");
            if inner.fired {
                return;
            }
            inner.fired = true;
            std::mem::take(&mut inner.waiters)
        };

        for tx in waiters {
            // A dropped receiver just stopped listening.
            let _ = tx.send(());
        }
    }
}

impl Default for ReadyNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// A subscription to the readiness event.
pub struct ReadySignal(Option<oneshot::Receiver<()>>);

impl ReadySignal {
    /// Resolve when the event fires.
    ///
    /// Pends forever for subscriptions taken after the event already fired,
    /// or if the event never fires; late code should poll the accessor.
    pub async fn wait(self) {
        if let Some(rx) = self.0 {
            if rx.await.is_ok() {
                return;
            }
        }
        std::future::pending::<()>().await
    }

    /// Whether this subscription can still be resolved by a future fire.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.0.is_some()
    }
}
