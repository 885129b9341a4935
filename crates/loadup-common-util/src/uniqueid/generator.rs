use core::fmt;
use core::ops::Range;
use parking_lot::Mutex;
use tracing::instrument;

use crate::pool::string_pool;
use crate::uniqueid::{
    HostResolver, IdDigest, LocalHost, RandSource, ThreadRandom, TimeSource, WallClock,
    context_id, default_digest, encode_hex, resolve_host_identifier,
};

/// Range the random field of an ID is drawn from, end exclusive.
///
/// Four digits keep IDs short, but leave a real collision window for two
/// calls on the same thread context in the same millisecond. Widening it
/// changes the ID format, so it stays.
pub const RANDOM_RANGE: Range<u32> = 1000..9999;

/// A process-wide generator of unique correlation IDs.
///
/// One instance is built by the process composition root and shared by
/// reference (or `Arc`) with whatever needs IDs. All operations take `&self`
/// and are safe to call from many threads at once.
///
/// ## Guarantees
/// - [`next_timestamp`] is strictly increasing per instance, even when the
///   wall clock stalls or steps backwards.
/// - [`next_id`] is `<timestamp>-<random>-<host>-<context>`.
/// - [`next_id_hash`] is the lowercase hex digest of a fresh [`next_id`],
///   or the plain ID when no digest is configured.
/// - Nothing here fails: construction problems are replaced by fallbacks.
///
/// # Example
/// ```
/// use loadup_common_util::uniqueid::{DisabledHost, UniqueId};
///
/// let ids = UniqueId::builder().host_resolver(DisabledHost).build();
///
/// let id = ids.next_id();
/// assert_eq!(id.matches('-').count(), 3);
///
/// let hash = ids.next_id_hash();
/// # #[cfg(feature = "md5")]
/// assert_eq!(hash.len(), 32);
/// ```
///
/// [`next_timestamp`]: UniqueId::next_timestamp
/// [`next_id`]: UniqueId::next_id
/// [`next_id_hash`]: UniqueId::next_id_hash
pub struct UniqueId<T = WallClock, R = ThreadRandom>
where
    T: TimeSource<u64>,
    R: RandSource<u32>,
{
    last_timestamp: Mutex<u64>,
    host: String,
    time: T,
    rng: R,
    digest: Option<Box<dyn IdDigest>>,
}

impl UniqueId {
    /// Creates a generator with the system clock, the thread-local RNG, the
    /// local host address and the default digest.
    ///
    /// Resolving the local host address goes through the system resolver
    /// and may block for as long as name resolution takes, with no timeout.
    /// Where that is unacceptable, build with [`DisabledHost`] (time based
    /// host field) or a pre-resolved [`StaticHost`]:
    ///
    /// ```
    /// use loadup_common_util::uniqueid::{DisabledHost, UniqueId};
    ///
    /// let ids = UniqueId::builder().host_resolver(DisabledHost).build();
    /// assert!(ids.host_identifier().bytes().all(|b| b.is_ascii_digit()));
    /// ```
    ///
    /// [`DisabledHost`]: crate::uniqueid::DisabledHost
    /// [`StaticHost`]: crate::uniqueid::StaticHost
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts a [`UniqueIdBuilder`] preloaded with the defaults of
    /// [`UniqueId::new`].
    #[must_use]
    pub fn builder() -> UniqueIdBuilder {
        UniqueIdBuilder::default()
    }
}

impl Default for UniqueId {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> UniqueId<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u32>,
{
    /// Returns the next millisecond timestamp, strictly greater than every
    /// value this instance returned before.
    ///
    /// The value is `max(previous + 1, now)`, so bursts within one
    /// millisecond run ahead of the clock by a few milliseconds and settle
    /// back once the clock catches up.
    #[instrument(level = "trace", skip(self))]
    pub fn next_timestamp(&self) -> u64 {
        let now = self.time.current_millis();
        let mut last = self.last_timestamp.lock();
        *last = last.saturating_add(1).max(now);
        *last
    }

    /// Returns a new identifier `<timestamp>-<random>-<host>-<context>`.
    #[instrument(level = "trace", skip(self))]
    pub fn next_id(&self) -> String {
        let timestamp = self.next_timestamp();
        let random = self.rng.rand_in(RANDOM_RANGE);
        let id = format!(
            "{timestamp}{sep}{random}{sep}{host}{sep}{context}",
            sep = string_pool::DASH,
            host = self.host,
            context = context_id(),
        );
        tracing::debug!(%id, "generated unique id");
        id
    }

    /// Returns the hex digest of a new [`UniqueId::next_id`].
    ///
    /// Falls back to the plain ID when the generator has no digest.
    #[instrument(level = "trace", skip(self))]
    pub fn next_id_hash(&self) -> String {
        let id = self.next_id();
        match &self.digest {
            Some(digest) => {
                let hash = encode_hex(&digest.digest(id.as_bytes()));
                tracing::debug!(%hash, "generated unique id hash");
                hash
            }
            None => id,
        }
    }

    /// The host field embedded in every ID.
    #[must_use]
    pub fn host_identifier(&self) -> &str {
        &self.host
    }

    /// Whether [`UniqueId::next_id_hash`] actually hashes.
    #[must_use]
    pub fn has_digest(&self) -> bool {
        self.digest.is_some()
    }
}

impl<T, R> fmt::Debug for UniqueId<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u32>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueId")
            .field("last_timestamp", &*self.last_timestamp.lock())
            .field("host", &self.host)
            .field("has_digest", &self.has_digest())
            .finish_non_exhaustive()
    }
}

/// Builds a [`UniqueId`] with injected collaborators.
///
/// Every collaborator has a production default; tests swap in fixed clocks,
/// fixed random sources and failing host resolvers.
pub struct UniqueIdBuilder<T = WallClock, R = ThreadRandom> {
    time: T,
    rng: R,
    host: Box<dyn HostResolver>,
    digest: Option<Box<dyn IdDigest>>,
}

impl Default for UniqueIdBuilder {
    fn default() -> Self {
        Self {
            time: WallClock,
            rng: ThreadRandom,
            host: Box::new(LocalHost),
            digest: default_digest(),
        }
    }
}

impl<T, R> UniqueIdBuilder<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u32>,
{
    /// Replaces the clock.
    pub fn clock<T2: TimeSource<u64>>(self, time: T2) -> UniqueIdBuilder<T2, R> {
        UniqueIdBuilder {
            time,
            rng: self.rng,
            host: self.host,
            digest: self.digest,
        }
    }

    /// Replaces the random source.
    pub fn rng<R2: RandSource<u32>>(self, rng: R2) -> UniqueIdBuilder<T, R2> {
        UniqueIdBuilder {
            time: self.time,
            rng,
            host: self.host,
            digest: self.digest,
        }
    }

    /// Replaces the host resolver consulted once by [`build`].
    ///
    /// [`build`]: UniqueIdBuilder::build
    #[must_use]
    pub fn host_resolver(mut self, resolver: impl HostResolver + 'static) -> Self {
        self.host = Box::new(resolver);
        self
    }

    /// Replaces the digest used by [`UniqueId::next_id_hash`].
    #[must_use]
    pub fn digest(mut self, digest: impl IdDigest + 'static) -> Self {
        self.digest = Some(Box::new(digest));
        self
    }

    /// Removes the digest; hashed IDs become plain IDs.
    #[must_use]
    pub fn without_digest(mut self) -> Self {
        self.digest = None;
        self
    }

    /// Resolves the host once and returns the ready generator.
    ///
    /// The last-emitted timestamp starts at the clock's current reading, so
    /// the first ID of a fresh generator is at least one millisecond ahead
    /// of construction time.
    pub fn build(self) -> UniqueId<T, R> {
        let now = self.time.current_millis();
        let host = resolve_host_identifier(self.host.as_ref(), now);
        UniqueId {
            last_timestamp: Mutex::new(now),
            host,
            time: self.time,
            rng: self.rng,
            digest: self.digest,
        }
    }
}
