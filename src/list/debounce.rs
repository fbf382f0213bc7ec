/// Coalesces rapid successive values; only the last one is released once the
/// input has been quiet for `delay_ms`.
///
/// The clock is passed in as milliseconds so callers decide where time comes from.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay_ms: i64,
    pending: Option<(T, i64)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms: i64::from(delay_ms),
            pending: None,
        }
    }

    /// Replaces any pending value and restarts the quiet interval.
    pub fn push(&mut self, value: T, now_ms: i64) {
        self.pending = Some((value, now_ms + self.delay_ms));
    }

    pub fn deadline(&self) -> Option<i64> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// Releases the pending value if its deadline has passed.
    pub fn poll(&mut self, now_ms: i64) -> Option<T> {
        match self.pending {
            Some((_, due)) if now_ms >= due => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
