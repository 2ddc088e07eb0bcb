//! Fixed-period tasks on dedicated threads.
//!
//! Each task gets its own named thread so a slow pin read can never stall
//! the battery timer, and vice versa. The loop runs at a fixed rate: the
//! next deadline is computed from the previous one, not from when the body
//! finished. If the body overruns, missed deadlines are skipped rather than
//! replayed in a burst. The first run happens one period after spawn.
//!
//! [`PeriodicTask::stop`] sets an atomic flag and unparks the thread, so a
//! stop request does not wait out the remainder of a long period.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::error::{Error, Result};

pub struct PeriodicTask {
    name: &'static str,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl PeriodicTask {
    /// Spawn `body` on a thread named `name`, invoked every `period`
    /// starting one period from now. A zero period is rejected.
    pub fn spawn(
        name: &'static str,
        period: Duration,
        mut body: impl FnMut() + Send + 'static,
    ) -> Result<Self> {
        if period.is_zero() {
            warn!("Task '{}' not started: zero period", name);
            return Err(Error::Config("task period must be non-zero"));
        }

        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name(name.into())
            .spawn(move || {
                let mut deadline = Instant::now() + period;
                loop {
                    // Parking may wake early (unpark or spuriously).
                    while !stop_flag.load(Ordering::Acquire) {
                        let now = Instant::now();
                        if now >= deadline {
                            break;
                        }
                        thread::park_timeout(deadline - now);
                    }
                    if stop_flag.load(Ordering::Acquire) {
                        break;
                    }

                    body();

                    deadline += period;
                    let now = Instant::now();
                    while deadline <= now {
                        deadline += period;
                    }
                }
            })
            .map_err(|e| {
                warn!("Spawning '{}' failed: {}", name, e);
                Error::Init("task thread spawn failed")
            })?;

        info!("Task '{}' started (period={}ms)", name, period.as_millis());
        Ok(Self {
            name,
            stop,
            handle: Some(handle),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ask the task to stop after its current iteration.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = &self.handle {
            handle.thread().unpark();
        }
    }

    /// Stop the task and wait for its thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.request_stop();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Task '{}' panicked", self.name);
            } else {
                info!("Task '{}' stopped", self.name);
            }
        }
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.shutdown();
    }
}
