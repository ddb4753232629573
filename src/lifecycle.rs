//! Teardown signalling for mounted sections.
//!
//! Loader and submission tasks hold a [`TeardownHandle`]; once the owning
//! [`Teardown`] is signalled (or dropped) they stop waiting and never write
//! results back into disposed state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::signal;
use tokio::sync::Notify;

pub struct Teardown {
    torn_down: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Teardown {
    pub fn new() -> Self {
        Self {
            torn_down: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Signal teardown. Idempotent.
    pub fn signal(&self) {
        if !self.torn_down.swap(true, Ordering::SeqCst) {
            tracing::debug!("Teardown signalled");
            self.notify.notify_waiters();
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    pub fn handle(&self) -> TeardownHandle {
        TeardownHandle {
            torn_down: Arc::clone(&self.torn_down),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for Teardown {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.signal();
    }
}

/// Lightweight handle for observing teardown from spawned tasks.
#[derive(Clone)]
pub struct TeardownHandle {
    torn_down: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl TeardownHandle {
    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) {
        // Register interest before checking the flag, otherwise a signal
        // landing between the check and the await would be lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_torn_down() {
            return;
        }
        notified.await;
    }
}

/// Wait for Ctrl+C or SIGTERM, returning early once `teardown` fires.
pub async fn wait_for_os_signal(teardown: &TeardownHandle) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        tokio::select! {
            _ = signal::ctrl_c() => {},
            _ = sigterm.recv() => {},
            _ = teardown.wait() => {},
        }
    }

    #[cfg(not(unix))]
    {
        tokio::select! {
            _ = signal::ctrl_c() => {},
            _ = teardown.wait() => {},
        }
    }

    Ok(())
}
