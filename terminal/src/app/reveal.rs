//! # Reveal and Toast Deadlines
//!
//! Sensitive values (card number, CVV, account number) are shown in clear only
//! for a short window after the user asks for them. Toasts work the same way.
//!
//! Both are plain deadline values stored in the screen state: nothing is
//! scheduled, the renderer just asks "is it still visible at `now`?". Leaving
//! the screen drops the state, and with it every pending deadline.

use std::time::{Duration, Instant};

/// How long a revealed value stays in clear.
pub const REVEAL_DURATION: Duration = Duration::from_secs(5);

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Masked-by-default value with an auto-hide deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    until: Option<Instant>,
}

impl Reveal {
    /// Flip visibility. Returns `true` if the value is now revealed.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_revealed(now) {
            self.until = None;
            false
        } else {
            self.until = Some(now + REVEAL_DURATION);
            true
        }
    }

    pub fn is_revealed(&self, now: Instant) -> bool {
        matches!(self.until, Some(until) if now < until)
    }

    pub fn hide(&mut self) {
        self.until = None;
    }

    /// Time left before the value masks itself again
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.until
            .filter(|until| now < *until)
            .map(|until| until - now)
    }
}

/// Short-lived message shown over the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toast {
    message: Option<String>,
    until: Option<Instant>,
}

impl Toast {
    /// Show `message`, replacing any toast still on screen.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some(message.into());
        self.until = Some(now + TOAST_DURATION);
    }

    pub fn current(&self, now: Instant) -> Option<&str> {
        match self.until {
            Some(until) if now < until => self.message.as_deref(),
            _ => None,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.until
            .filter(|until| now < *until)
            .map(|until| until - now)
    }
}
