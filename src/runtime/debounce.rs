use std::fmt;
use std::time::{Duration, Instant};

struct Pending<T> {
    due_at: Instant,
    arg: T,
}

/// A trailing-edge debounced call.
///
/// Holds at most one pending invocation; every `call` replaces it and pushes
/// the deadline out again. The owner drives time by calling `fire_due`.
pub struct Debounced<T, F>
where
    F: FnMut(T),
{
    op: F,
    delay: Duration,
    pending: Option<Pending<T>>,
}

pub fn debounce<T, F>(op: F, delay: Duration) -> Debounced<T, F>
where
    F: FnMut(T),
{
    Debounced {
        op,
        delay,
        pending: None,
    }
}

impl<T, F> Debounced<T, F>
where
    F: FnMut(T),
{
    pub fn call(&mut self, arg: T, now: Instant) {
        self.pending = Some(Pending {
            due_at: now + self.delay,
            arg,
        });
    }

    /// Runs the pending call if its quiet period is over.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.due_at <= now);
        if !due {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };
        (self.op)(pending.arg);
        true
    }

    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.due_at)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        match self.deadline() {
            Some(due_at) => due_at.saturating_duration_since(now).min(default_timeout),
            None => default_timeout,
        }
    }
}

impl<T, F> fmt::Debug for Debounced<T, F>
where
    F: FnMut(T),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.delay)
            .field("deadline", &self.deadline())
            .finish()
    }
}
