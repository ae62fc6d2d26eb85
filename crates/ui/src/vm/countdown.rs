use std::time::Duration;

use dioxus::prelude::*;

/// Wall-clock length of one countdown tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Owns the countdown task for the active trial.
///
/// At most one task is alive at a time: arming a new key cancels the old
/// task first, so a stale tick can never reach a newer trial. Views hold
/// the guard in a signal; dropping it on unmount cancels the task too.
#[derive(Default)]
pub struct CountdownGuard {
    key: Option<(u32, usize)>,
    task: Option<Task>,
}

impl CountdownGuard {
    /// Keep the countdown in sync with the trial identified by `key`.
    ///
    /// `None` stops the task. A changed key cancels the old task and starts
    /// a fresh tick loop firing `on_tick` every [`TICK_INTERVAL`] until
    /// cancelled. An unchanged key leaves the running task alone.
    pub fn sync(&mut self, key: Option<(u32, usize)>, on_tick: Callback<()>) {
        if self.key == key {
            return;
        }
        self.stop();
        self.key = key;
        if key.is_some() {
            self.task = Some(spawn(async move {
                loop {
                    tokio::time::sleep(TICK_INTERVAL).await;
                    on_tick.call(());
                }
            }));
        }
    }

    /// Cancel the running countdown, if any.
    pub fn stop(&mut self) {
        self.key = None;
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }
}

// Unmounting the owning screen drops the guard and cancels the task with it.
impl Drop for CountdownGuard {
    fn drop(&mut self) {
        self.stop();
    }
}
