use crate::constants::RESIZE_DEBOUNCE_MS;

/// Handed out by [`Debouncer::arm`]; only the most recent ticket can settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Trailing-edge debounce. The host arms a timer of [`Debouncer::quiet_ms`]
/// per event and calls [`Debouncer::settle`] when it fires; stale timers
/// settle to `false`, so a burst of events collapses into one action.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet_ms: f64,
    generation: u64,
    pending: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE_MS)
    }
}

impl Debouncer {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            generation: 0,
            pending: false,
        }
    }

    #[inline]
    pub fn quiet_ms(&self) -> f64 {
        self.quiet_ms
    }

    pub fn arm(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        Ticket(self.generation)
    }

    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.pending && ticket.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
