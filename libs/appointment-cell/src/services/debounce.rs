use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(300);

/// Cancellable debounce timers keyed by input field.
///
/// Each call restarts the quiet window for its key: the previous pending
/// task is aborted and a fresh one is spawned. Superseded and torn-down
/// actions never run.
pub struct Debouncer {
    quiet_window: Duration,
    tasks: Mutex<HashMap<String, JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(quiet_window: Duration) -> Self {
        Self {
            quiet_window,
            tasks: Mutex::new(HashMap::new()),
        }
    }

    /// Schedule `action` to run after the quiet window, aborting any pending
    /// action for the same key.
    pub fn debounce<F, Fut>(&self, key: &str, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let quiet_window = self.quiet_window;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet_window).await;
            action().await;
        });

        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = tasks.insert(key.to_string(), handle) {
            debug!("Restarting debounce window for {}", key);
            previous.abort();
        }
    }

    pub fn cancel(&self, key: &str) {
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = tasks.remove(key) {
            handle.abort();
        }
    }

    pub fn cancel_all(&self) {
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        for (_, handle) in tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_WINDOW)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
