use std::time::{SystemTime, UNIX_EPOCH};

/// A trait for time sources that return a wall-clock timestamp.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests. The unit is **milliseconds** since the Unix epoch.
///
/// # Example
///
/// ```
/// use loadup_common_util::uniqueid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedTime.current_millis(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> T;
}

/// The system wall clock.
///
/// Unlike a monotonic timer this can jump backwards when the host clock is
/// adjusted; [`UniqueId`] compensates by never emitting a timestamp lower
/// than the previous one plus one.
///
/// [`UniqueId`]: crate::uniqueid::UniqueId
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock;

impl TimeSource<u64> for WallClock {
    fn current_millis(&self) -> u64 {
        // A clock set before 1970 reads as the epoch itself.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64)
    }
}

impl<T, S: TimeSource<T> + ?Sized> TimeSource<T> for &S {
    fn current_millis(&self) -> T {
        (**self).current_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_clock_is_after_2025() {
        // 2025-01-01T00:00:00Z
        assert!(WallClock.current_millis() > 1_735_689_600_000);
    }
}
