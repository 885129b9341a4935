use anyhow::anyhow;
use loadup_common_util::uniqueid::{RandSource, TimeSource, UniqueId};
use std::thread::scope;

/// Splits `count` IDs across `threads` workers sharing `generator` and
/// returns them grouped by worker, in worker order.
///
/// The first `count % threads` workers produce one extra ID.
pub fn generate_ids<T, R>(
    generator: &UniqueId<T, R>,
    count: usize,
    threads: usize,
    hash: bool,
) -> anyhow::Result<Vec<Vec<String>>>
where
    T: TimeSource<u64> + Sync,
    R: RandSource<u32> + Sync,
{
    let threads = threads.max(1);
    let (per_thread, remainder) = (count / threads, count % threads);

    scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|worker| {
                let quota = per_thread + usize::from(worker < remainder);
                s.spawn(move || {
                    tracing::debug!(worker, quota, "worker started");
                    (0..quota)
                        .map(|_| {
                            if hash {
                                generator.next_id_hash()
                            } else {
                                generator.next_id()
                            }
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| anyhow!("ID worker thread panicked")))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadup_common_util::uniqueid::DisabledHost;
    use std::collections::HashSet;

    #[test]
    fn splits_count_across_workers() {
        let generator = UniqueId::builder().host_resolver(DisabledHost).build();

        let batches = generate_ids(&generator, 10, 3, false).unwrap();

        let sizes: Vec<_> = batches.iter().map(Vec::len).collect();
        assert_eq!(sizes, [4, 3, 3]);
    }

    #[test]
    fn ids_are_unique_across_workers() {
        let generator = UniqueId::builder().host_resolver(DisabledHost).build();

        let batches = generate_ids(&generator, 2000, 4, false).unwrap();

        let all: HashSet<_> = batches.iter().flatten().collect();
        assert_eq!(all.len(), 2000);

        let contexts: HashSet<_> = batches
            .iter()
            .map(|batch| batch[0].rsplit('-').next().unwrap().to_owned())
            .collect();
        assert_eq!(contexts.len(), 4);
    }

    #[test]
    fn hashed_ids_are_hex() {
        let generator = UniqueId::builder().host_resolver(DisabledHost).build();

        let batches = generate_ids(&generator, 5, 1, true).unwrap();

        for id in &batches[0] {
            assert!(id.bytes().all(|b| b.is_ascii_hexdigit()));
        }
    }
}
