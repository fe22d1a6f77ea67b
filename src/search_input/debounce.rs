//! Debounced search scheduling
//!
//! Timers are plain data: a pending search holds a token, the text captured
//! when it was armed, and the time it becomes due. The caller drives time by
//! polling; a cancelled or superseded token can never fire.

/// Identifies one armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone)]
struct PendingSearch {
    token: TimerToken,
    due_at: u64,
    text: String,
}

/// Coalesces rapid changes into a single delayed search
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u64,
    submit_only: bool,
    pending: Option<PendingSearch>,
    next_token: u64,
}

impl Debouncer {
    pub fn new(delay_ms: u64, submit_only: bool) -> Self {
        Self {
            delay_ms,
            submit_only,
            pending: None,
            next_token: 0,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn is_submit_only(&self) -> bool {
        self.submit_only
    }

    /// Record a change at `now_ms`. Any pending timer is cancelled first; in
    /// submit-only mode nothing new is armed.
    pub fn notify_changed(&mut self, text: &str, now_ms: u64) -> Option<TimerToken> {
        self.cancel();

        if self.submit_only {
            return None;
        }

        self.next_token = self.next_token.wrapping_add(1);
        let token = TimerToken(self.next_token);
        let due_at = now_ms.saturating_add(self.delay_ms);
        log::debug!("armed search timer {:?} due at {}ms", token, due_at);
        self.pending = Some(PendingSearch {
            token,
            due_at,
            text: text.to_string(),
        });
        Some(token)
    }

    /// Drop the pending timer, if any
    pub fn cancel(&mut self) -> Option<TimerToken> {
        let cancelled = self.pending.take().map(|p| p.token);
        if let Some(token) = cancelled {
            log::debug!("cancelled search timer {:?}", token);
        }
        cancelled
    }

    /// Take the captured text if the pending timer is due at `now_ms`
    pub fn poll(&mut self, now_ms: u64) -> Option<String> {
        match &self.pending {
            Some(p) if now_ms >= p.due_at => self.pending.take().map(|p| {
                log::debug!("search timer {:?} fired at {}ms", p.token, now_ms);
                p.text
            }),
            _ => None,
        }
    }

    /// Take the captured text if `token` is still the pending timer,
    /// regardless of time. For hosts that run real timers.
    pub fn fire(&mut self, token: TimerToken) -> Option<String> {
        match &self.pending {
            Some(p) if p.token == token => self.pending.take().map(|p| p.text),
            _ => {
                log::trace!("ignoring stale search timer {:?}", token);
                None
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_token(&self) -> Option<TimerToken> {
        self.pending.as_ref().map(|p| p.token)
    }

    /// When the pending search becomes due
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_at)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(super::DEFAULT_DEBOUNCE_MS, false)
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
