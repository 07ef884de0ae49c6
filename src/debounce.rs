use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

type Callback<T> = Arc<dyn Fn(T) -> BoxFuture<'static, ()> + Send + Sync>;

/// Coalesces rapid repeated triggers into a single delayed execution.
///
/// Each [`trigger`](Self::trigger) aborts any pending timer and schedules a
/// fresh one; after the delay elapses undisturbed, the callback runs with the
/// argument of the last trigger. Execution is fire-and-forget, nothing is
/// returned to the caller.
///
/// The callback can be swapped with [`set_callback`](Self::set_callback)
/// without losing a pending timer; a timer that fires after a swap invokes
/// the current callback, not the one captured at trigger time.
pub struct DebouncedGate<T> {
    delay: Duration,
    callback: Arc<Mutex<Callback<T>>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> DebouncedGate<T> {
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(T) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    {
        DebouncedGate {
            delay,
            callback: Arc::new(Mutex::new(Arc::new(callback))),
            pending: Mutex::new(None),
        }
    }

    /// Replace the underlying callback. A pending timer is left running and
    /// will pick up the new callback when it fires.
    pub async fn set_callback<F>(&self, callback: F)
    where
        F: Fn(T) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    {
        *self.callback.lock().await = Arc::new(callback);
    }

    /// Schedule an execution with `arg`, superseding any pending one.
    pub async fn trigger(&self, arg: T) {
        let mut pending = self.pending.lock().await;
        if let Some(prev) = pending.take() {
            prev.abort();
        }

        let slot = Arc::clone(&self.callback);
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Read the callback after the delay so a swap mid-wait takes
            // effect.
            let callback = { slot.lock().await.clone() };
            callback(arg).await;
        }));
    }

    /// Cancel a pending execution, if any.
    pub async fn cancel(&self) {
        if let Some(prev) = self.pending.lock().await.take() {
            prev.abort();
        }
    }
}
