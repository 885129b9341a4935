use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    /// Assigned on first use by each OS thread, never reused within the
    /// process.
    static CONTEXT_ID: u64 = NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed);
}

/// Returns the scheduling-context discriminator of the calling thread.
///
/// The value is unique per OS thread for the lifetime of the process, which
/// keeps two threads that hit the same millisecond and the same random draw
/// from producing the same ID.
///
/// # Example
/// ```
/// use loadup_common_util::uniqueid::context_id;
///
/// let here = context_id();
/// assert_eq!(here, context_id());
/// let there = std::thread::spawn(context_id).join().unwrap();
/// assert_ne!(here, there);
/// ```
#[must_use]
pub fn context_id() -> u64 {
    CONTEXT_ID.with(|id| *id)
}
