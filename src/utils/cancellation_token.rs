use std::{
    sync::{Condvar, Mutex},
    time::Duration,
};

/// A cancellation token shared between a worker thread and whoever owns it.
///
/// Cancelling wakes up any thread currently blocked in
/// [`CancellationToken::sleep_with_cancellation`], so a sleeping worker
/// notices immediately rather than after its sleep runs out.
#[derive(Debug)]
pub struct CancellationToken {
    // Setting this to true marks the token as cancelled. It never goes back.
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
    /// Mark the [`CancellationToken`] as cancelled.
    ///
    /// This is idempotent; cancelling an already cancelled token does nothing.
    pub fn cancel(&self) {
        let mut guard = self
            .mutex
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if !*guard {
            *guard = true;
            self.cvar.notify_all();
        }
    }

    /// Returns whether the token has been cancelled. This blocks only for as
    /// long as another thread holds the lock, which is never for long.
    pub fn is_cancelled(&self) -> bool {
        *self
            .mutex
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Sleeps for `duration`, waking early if the token gets cancelled.
    ///
    /// Returns whether the token is cancelled once the sleep is over. If the
    /// token was already cancelled this returns `true` without sleeping.
    pub fn sleep_with_cancellation(&self, duration: Duration) -> bool {
        let guard = self
            .mutex
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let (result, _) = self
            .cvar
            .wait_timeout_while(guard, duration, |cancelled| !*cancelled)
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        *result
    }
}
