//! Monotonic millisecond timestamps for pointer samples.

use web_time::Instant;

/// Maps wall-clock instants onto the `i64` millisecond timeline used by
/// [`PointerSample`](crate::gesture::PointerSample).
///
/// The engine itself never reads a clock; hosts whose input events arrive
/// untimestamped can stamp them with one of these.
#[derive(Clone, Copy, Debug)]
pub struct SampleClock {
    origin: Instant,
}

impl SampleClock {
    /// A clock whose zero is the moment of creation.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock was created.
    pub fn now_ms(&self) -> i64 {
        self.origin.elapsed().as_millis() as i64
    }
}

impl Default for SampleClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotone() {
        let clock = SampleClock::new();
        let first = clock.now_ms();
        let second = clock.now_ms();
        assert!(first >= 0);
        assert!(second >= first);
    }
}
