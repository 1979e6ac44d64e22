//! # Power Boundary
//!
//! The core never manipulates power states itself; it asks its host for one
//! of three actions: busy-wait, timed light sleep, and indefinite light
//! sleep. [`HostPower`] implements the boundary for a hosted target with a
//! condvar that button interrupts notify, so a press ends a doze or suspend
//! immediately.

use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

/// Host power actions the control loop can request.
pub trait PowerControl {
    /// Busy wait: short, animation is running, stay responsive.
    fn nap(&self, duration: Duration);

    /// Timed low-power wait; returns early if a button fires first.
    fn doze(&self, duration: Duration);

    /// Indefinite low-power wait; only a button press ends it.
    fn suspend(&self);
}

/// Condvar-backed power control for hosted targets.
///
/// `wake` is called from the button interrupt callbacks. A wake that lands
/// just before a doze/suspend begins is not lost: the flag is consumed by
/// the next wait.
pub struct HostPower {
    woken: Mutex<bool>,
    cond: Condvar,
}

impl HostPower {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            woken: Mutex::new(false),
            cond: Condvar::new(),
        })
    }

    /// End any in-progress (or imminent) low-power wait.
    pub fn wake(&self) {
        let mut woken = self.woken.lock().unwrap();
        *woken = true;
        self.cond.notify_all();
    }
}

impl PowerControl for HostPower {
    fn nap(&self, duration: Duration) {
        thread::sleep(duration);
    }

    fn doze(&self, duration: Duration) {
        let woken = self.woken.lock().unwrap();
        let (mut woken, _timeout) = self
            .cond
            .wait_timeout_while(woken, duration, |woken| !*woken)
            .unwrap();
        *woken = false;
    }

    fn suspend(&self) {
        let woken = self.woken.lock().unwrap();
        let mut woken = self.cond.wait_while(woken, |woken| !*woken).unwrap();
        *woken = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn doze_times_out_without_a_wake() {
        let power = HostPower::new();
        let start = Instant::now();
        power.doze(Duration::from_millis(50));
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn doze_returns_early_on_wake() {
        let power = HostPower::new();
        let waker = Arc::clone(&power);
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            waker.wake();
        });

        let start = Instant::now();
        power.doze(Duration::from_secs(10));
        assert!(start.elapsed() < Duration::from_secs(5));
        handle.join().unwrap();
    }

    #[test]
    fn suspend_ends_on_wake() {
        let power = HostPower::new();
        let waker = Arc::clone(&power);
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            waker.wake();
        });

        power.suspend();
        handle.join().unwrap();
    }

    #[test]
    fn wake_before_doze_is_not_lost() {
        let power = HostPower::new();
        power.wake();
        let start = Instant::now();
        power.doze(Duration::from_secs(10));
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
