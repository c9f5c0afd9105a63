//! Backlight power and idle handling.
//!
//! The input watcher never touches this state directly: it sends
//! [`Event::Interaction`] over a channel and the scheduler, which owns the
//! [`PowerMachine`], applies every transition.

use std::time::{Duration, Instant};

/// Messages from the input watcher to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user button was observed pressed at the given time.
    Interaction(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    /// Backlight on, periodic field updates run
    Awake,
    /// Backlight off, periodic field updates suspended
    Idle,
}

/// Backlight change requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backlight {
    On,
    Off,
}

#[derive(Debug, Clone)]
pub struct PowerMachine {
    state: PowerState,
    last_interaction: Instant,
    idle_timeout: Duration,
}

impl PowerMachine {
    /// Start awake, counting idle time from `now`.
    pub fn new(now: Instant, idle_timeout: Duration) -> Self {
        Self {
            state: PowerState::Awake,
            last_interaction: now,
            idle_timeout,
        }
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn updates_enabled(&self) -> bool {
        self.state == PowerState::Awake
    }

    pub fn backlight_on(&self) -> bool {
        self.state == PowerState::Awake
    }

    pub fn last_interaction(&self) -> Instant {
        self.last_interaction
    }

    /// Every observed press restarts the idle timer and asks for the
    /// backlight, whether or not the machine was idle.
    pub fn interaction(&mut self, now: Instant) -> Backlight {
        self.last_interaction = now;
        self.state = PowerState::Awake;
        Backlight::On
    }

    pub fn handle(&mut self, event: Event) -> Backlight {
        match event {
            Event::Interaction(at) => self.interaction(at),
        }
    }

    /// Periodic check from the scheduler. Returns `Some(Backlight::Off)` on
    /// the transition to idle.
    pub fn tick(&mut self, now: Instant) -> Option<Backlight> {
        if self.state == PowerState::Awake
            && now.saturating_duration_since(self.last_interaction) > self.idle_timeout
        {
            self.state = PowerState::Idle;
            return Some(Backlight::Off);
        }
        None
    }
}
