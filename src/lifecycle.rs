//! Service Lifecycle — process-wide shutdown coordination, generalized from
//! `services/core/service.py::AsyncService` (`_running`, signal handlers
//! registered with `loop.add_signal_handler`, `asyncio.gather(*tasks)` then
//! `_on_shutdown()` in a `finally`).
//!
//! Rust has no per-task cancellation as cheap as `asyncio`'s, so `Shutdown`
//! pairs the spec's polled `running` flag (checked "between iterations and
//! after each suspension point", spec §6.7) with a `Notify` every blocking
//! read races against in its own `tokio::select!` branch — the two together
//! give the same effect `task.cancel()` gives the original: a blocked
//! reader loop wakes immediately on shutdown instead of waiting for its next
//! message.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

#[derive(Clone)]
pub struct Shutdown {
    running: Arc<AtomicBool>,
    notify: Arc<tokio::sync::Notify>,
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
            notify: Arc::new(tokio::sync::Notify::new()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Clear `running` and wake every task parked on [`Shutdown::recv`].
    pub fn trigger(&self) {
        self.running.store(false, Ordering::Relaxed);
        self.notify.notify_waiters();
    }

    /// Suitable as a `tokio::select!` branch alongside a blocking read or
    /// timer: resolves once shutdown has been triggered, racing whatever
    /// suspension point the loop is otherwise waiting on.
    pub async fn recv(&self) {
        if !self.is_running() {
            return;
        }
        self.notify.notified().await;
    }
}

/// Spawns the task that waits for SIGINT or SIGTERM and triggers shutdown,
/// mirroring `AsyncService.run()`'s `loop.add_signal_handler(signal.SIGINT, ...)`
/// / `SIGTERM` registration.
pub fn install_signal_handlers(shutdown: Shutdown) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                return;
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("received SIGINT; shutting down");
            }
            _ = sigterm.recv() => {
                info!("received SIGTERM; shutting down");
            }
        }

        shutdown.trigger();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trigger_wakes_pending_recv() {
        let shutdown = Shutdown::new();
        assert!(shutdown.is_running());

        let waiter = {
            let shutdown = shutdown.clone();
            tokio::spawn(async move {
                shutdown.recv().await;
            })
        };

        tokio::task::yield_now().await;
        shutdown.trigger();
        tokio::time::timeout(std::time::Duration::from_secs(1), waiter)
            .await
            .expect("recv should resolve promptly after trigger")
            .unwrap();
        assert!(!shutdown.is_running());
    }

    #[tokio::test]
    async fn recv_returns_immediately_if_already_triggered() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
        tokio::time::timeout(std::time::Duration::from_millis(50), shutdown.recv())
            .await
            .expect("recv must not block once shutdown already happened");
    }
}
