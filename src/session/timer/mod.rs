use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;


/// Elapsed-seconds counter for timed sessions. Cloning shares the underlying
/// clock, so a background ticker can keep counting while the session holds
/// its own handle. Once stopped, further ticks are ignored for good.
#[derive(Clone, Debug)]
pub struct Timer {
    elapsed: Arc<AtomicU64>,
    running: Arc<AtomicBool>,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            elapsed: Arc::new(AtomicU64::new(0)),
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn tick(&self) {
        if self.is_running() {
            self.elapsed.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed.load(Ordering::SeqCst)
    }

    /// Drives `tick` on a steady cadence from a background thread. The thread
    /// exits on its own once the timer is stopped.
    pub fn spawn_ticker(&self, interval: Duration) {
        let timer = self.clone();
        thread::spawn(move || {
            while timer.is_running() {
                thread::sleep(interval);
                timer.tick();
            }
        });
    }
}

pub fn format_elapsed(elapsed_seconds: u64) -> String {
    let minutes = elapsed_seconds / 60;
    let seconds = elapsed_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
