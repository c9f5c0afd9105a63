//! User button watcher.
//!
//! Runs on its own thread, polling an active-low button line. Each poll that
//! sees the button held sends an [`Event::Interaction`]; the scheduler owns
//! every power transition.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use embedded_hal::digital::InputPin;

use crate::power::Event;

pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct InputWatcher<P> {
    button: P,
    events: Sender<Event>,
    shutdown: Arc<AtomicBool>,
    interval: Duration,
}

impl<P> InputWatcher<P>
where
    P: InputPin,
    P::Error: core::fmt::Debug,
{
    pub fn new(button: P, events: Sender<Event>, shutdown: Arc<AtomicBool>) -> Self {
        Self {
            button,
            events,
            shutdown,
            interval: POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sample the line once. Returns `false` once the scheduler has gone
    /// away and there is no one left to notify.
    pub fn poll(&mut self) -> bool {
        match self.button.is_low() {
            Ok(true) => self.events.send(Event::Interaction(Instant::now())).is_ok(),
            Ok(false) => true,
            Err(e) => {
                log::debug!("reading button line failed: {:?}", e);
                true
            }
        }
    }

    pub fn run(mut self) {
        while !self.shutdown.load(Ordering::Relaxed) {
            if !self.poll() {
                break;
            }
            thread::sleep(self.interval);
        }
        log::debug!("input watcher stopped");
    }

    pub fn spawn(self) -> io::Result<JoinHandle<()>>
    where
        P: Send + 'static,
    {
        thread::Builder::new()
            .name("input".into())
            .spawn(move || self.run())
    }
}
