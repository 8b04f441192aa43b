use std::{
    sync::{Condvar, Mutex},
    time::Duration,
};

/// A cancellation token, shared between the sampling loop and whatever
/// requests that it stops (e.g. a signal handler).
pub struct CancellationToken {
    // Setting this to true marks the token as cancelled.
    mutex: Mutex<bool>,
    cvar: Condvar,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self {
            mutex: Mutex::new(false),
            cvar: Condvar::new(),
        }
    }
}

impl CancellationToken {
    /// Mark the [`CancellationToken`] as cancelled, waking up anything
    /// sleeping on it.
    ///
    /// This is idempotent, and once cancelled, will stay cancelled.
    pub fn cancel(&self) {
        let mut guard = self
            .mutex
            .lock()
            .expect("cancellation token lock should not be poisoned");

        if !*guard {
            *guard = true;
            self.cvar.notify_all();
        }
    }

    /// Whether the [`CancellationToken`] has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        *self
            .mutex
            .lock()
            .expect("cancellation token lock should not be poisoned")
    }

    /// Sleeps for `duration`, returning early if the token is cancelled.
    ///
    /// Returns whether the token is cancelled after waking up. If it was
    /// already cancelled, this returns immediately.
    pub fn sleep_with_cancellation(&self, duration: Duration) -> bool {
        let guard = self
            .mutex
            .lock()
            .expect("cancellation token lock should not be poisoned");

        let (result, _) = self
            .cvar
            .wait_timeout_while(guard, duration, |cancelled| !*cancelled)
            .expect("cancellation token lock should not be poisoned");

        *result
    }
}
