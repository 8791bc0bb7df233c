use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared counter of draft lookups.
///
/// Every issued lookup gets the next token; only the holder of the latest
/// token may write into the draft. Clones share the same counter, so lookup
/// tasks can check whether they have been superseded before hitting the
/// network.
#[derive(Clone, Debug, Default)]
pub struct LookupGate {
    latest: Arc<AtomicU64>,
}

impl LookupGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token, superseding every earlier one.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Supersede every outstanding token without issuing a new lookup.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest()
    }
}
