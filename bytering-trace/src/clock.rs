//! Injectable time sources.

/// Source of nanosecond timestamps for trace records.
///
/// There is no global clock: every [`Tracer`](crate::Tracer) owns the clock
/// it stamps with. On a microcontroller this is typically a cycle counter or
/// a free-running timer read through [`FnClock`].
pub trait Clock {
    /// Current time in nanoseconds since an arbitrary fixed origin.
    fn now_ns(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_ns(&self) -> u64 {
        (**self).now_ns()
    }
}

/// Always reports time 0. Stand-in for targets with no timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroClock;

impl Clock for ZeroClock {
    #[inline]
    fn now_ns(&self) -> u64 {
        0
    }
}

/// Reads time from a closure.
///
/// ```
/// use bytering_trace::{Clock, FnClock};
/// use core::sync::atomic::{AtomicU64, Ordering};
///
/// static TICKS: AtomicU64 = AtomicU64::new(0);
/// let clock = FnClock::new(|| TICKS.load(Ordering::Relaxed) * 1_000);
///
/// TICKS.store(42, Ordering::Relaxed);
/// assert_eq!(clock.now_ns(), 42_000);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnClock<F>(pub F);

impl<F: Fn() -> u64> FnClock<F> {
    /// Wrap a closure.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: Fn() -> u64> Clock for FnClock<F> {
    #[inline]
    fn now_ns(&self) -> u64 {
        (self.0)()
    }
}

/// Nanoseconds elapsed since the clock was created.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    /// Start counting from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for MonotonicClock {
    #[inline]
    fn now_ns(&self) -> u64 {
        // Saturates after roughly 584 years.
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}
