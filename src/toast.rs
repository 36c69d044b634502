use std::time::{Duration, Instant};

/// Short-lived notification. A new message replaces the current one and
/// restarts the countdown.
#[derive(Debug, Clone)]
pub struct Toast {
    duration: Duration,
    current: Option<(String, Instant)>,
}

impl Toast {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        log::debug!("Toast: {message}");
        self.current = Some((message, now));
    }

    /// Message still on screen at `now`.
    pub fn message(&self, now: Instant) -> Option<&str> {
        match &self.current {
            Some((msg, shown)) if now.duration_since(*shown) < self.duration => Some(msg),
            _ => None,
        }
    }

    /// Drop an expired message. Returns the time left on a live one so the
    /// caller can schedule the next repaint.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let (_, shown) = self.current.as_ref()?;
        let elapsed = now.duration_since(*shown);
        if elapsed >= self.duration {
            self.current = None;
            None
        } else {
            Some(self.duration - elapsed)
        }
    }
}
