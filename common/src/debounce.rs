use chrono::{DateTime, Duration, Utc};

/// Quiet period before a typed name query takes effect.
pub const NAME_QUERY_QUIET_MS: i64 = 500;

/// Handle for one scheduled settle. A newer `schedule` or a `cancel`
/// invalidates every older ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    due: DateTime<Utc>,
}

impl Ticket {
    /// When the timer for this ticket should fire.
    pub fn due(&self) -> DateTime<Utc> {
        self.due
    }

    /// Delay from `now` until the ticket is due, never negative.
    pub fn delay_from(&self, now: DateTime<Utc>) -> Duration {
        (self.due - now).max(Duration::zero())
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    ticket: Ticket,
}

/// A value that only takes effect after it has stopped changing for a quiet
/// period.
///
/// The caller owns the actual timer: `schedule` hands back a [`Ticket`] to
/// arm it with, and `fire` is called when it expires. Restarting or cancelling
/// makes stale tickets harmless. `poll` is the timer-less equivalent for
/// callers driving time themselves.
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    quiet: Duration,
    settled: T,
    pending: Option<Pending<T>>,
    generation: u64,
}

impl<T> Debounced<T> {
    pub fn new(initial: T, quiet: Duration) -> Self {
        Self {
            quiet,
            settled: initial,
            pending: None,
            generation: 0,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// The value currently in effect.
    pub fn settled(&self) -> &T {
        &self.settled
    }

    /// The most recent input, settled or not.
    pub fn latest(&self) -> &T {
        self.pending
            .as_ref()
            .map(|p| &p.value)
            .unwrap_or(&self.settled)
    }

    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a new input, cancelling any pending settle, and return the
    /// ticket for the restarted timer.
    pub fn schedule(&mut self, value: T, now: DateTime<Utc>) -> Ticket {
        self.generation += 1;
        if self.pending.is_some() {
            tracing::trace!("debounce restarted (generation {})", self.generation);
        }
        let ticket = Ticket {
            generation: self.generation,
            due: now + self.quiet,
        };
        self.pending = Some(Pending { value, ticket });
        ticket
    }

    /// Timer callback. Settles the pending value if `ticket` is still the
    /// current one; returns whether the settled value was replaced.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        match self.pending.take() {
            Some(pending) if pending.ticket == ticket => {
                tracing::debug!("debounced value settled (generation {})", ticket.generation);
                self.settled = pending.value;
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    /// Settle the pending value if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        match self.pending_ticket() {
            Some(ticket) if ticket.due <= now => self.fire(ticket),
            _ => false,
        }
    }

    /// Drop the pending value, if any. The settled value is kept.
    pub fn cancel(&mut self) -> bool {
        self.generation += 1;
        let cancelled = self.pending.take().is_some();
        if cancelled {
            tracing::debug!("pending debounce cancelled");
        }
        cancelled
    }
}

impl<T: Default> Default for Debounced<T> {
    fn default() -> Self {
        Self::new(T::default(), Duration::milliseconds(NAME_QUERY_QUIET_MS))
    }
}
