use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use tracing::{error, warn};

use crate::error::Result;

/// Serializes cleanup requests so only one runs at a time.
///
/// Constructed once at startup around the full cleanup action and kept
/// alive for the process lifetime. [`trigger`](CleanupTask::trigger) is
/// safe to call repeatedly and concurrently from the hotkey dispatch
/// context: a press arriving while a run is in flight is dropped, never
/// queued, and the caller is never blocked.
pub struct CleanupTask<F> {
    action: Arc<F>,
    running: Arc<AtomicBool>,
}

/// Releases the latch when the background run ends, normally or by
/// panic, so the guard can never be left stuck on running.
struct LatchRelease(Arc<AtomicBool>);

impl Drop for LatchRelease {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<F> CleanupTask<F>
where
    F: Fn() -> Result<()> + Send + Sync + 'static,
{
    pub fn new(action: F) -> Self {
        Self {
            action: Arc::new(action),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a cleanup run is currently in flight.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Start a background cleanup run, or drop the request when one is
    /// already in flight. Returns immediately either way.
    pub fn trigger(&self) {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Cleanup already in progress; ignoring additional hotkey press.");
            return;
        }

        let action = Arc::clone(&self.action);
        let latch = LatchRelease(Arc::clone(&self.running));

        let spawned = thread::Builder::new()
            .name("hotsweep-cleanup".to_string())
            .spawn(move || {
                let _latch = latch;
                if let Err(err) = (action)() {
                    error!("Cleanup failed: {err}");
                }
            });

        // The closure owns the latch release, so a failed spawn drops it
        // and the latch reopens.
        if let Err(err) = spawned {
            error!("Failed to spawn the cleanup thread: {err}");
        }
    }
}
