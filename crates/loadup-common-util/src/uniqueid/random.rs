use core::ops::Range;
use rand::{Rng, rng};

/// A trait for random sources that draw uniformly from a range.
///
/// # Example
/// ```
/// use core::ops::Range;
/// use loadup_common_util::uniqueid::RandSource;
///
/// struct Lowest;
/// impl RandSource<u32> for Lowest {
///     fn rand_in(&self, range: Range<u32>) -> u32 {
///         range.start
///     }
/// }
///
/// assert_eq!(Lowest.rand_in(1000..9999), 1000);
/// ```
pub trait RandSource<T> {
    /// Returns a uniformly distributed value in `range` (end exclusive).
    fn rand_in(&self, range: Range<T>) -> T;
}

/// A `RandSource` backed by the thread-local RNG (`rand::rng()`).
///
/// The RNG is cryptographically secure (ChaCha-based) and periodically
/// reseeded from the OS. This type does not store the RNG, it only reaches
/// for the calling thread's generator, so it is `Send + Sync` and shared
/// freely between threads without contention.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandSource<u32> for ThreadRandom {
    fn rand_in(&self, range: Range<u32>) -> u32 {
        rng().random_range(range)
    }
}

impl RandSource<u64> for ThreadRandom {
    fn rand_in(&self, range: Range<u64>) -> u64 {
        rng().random_range(range)
    }
}
