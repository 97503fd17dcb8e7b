#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use rayon::prelude::*;

/// Batches smaller than this stay on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 16;

/// Maps `f` over `collection`, keeping input order in the output.
///
/// Runs on rayon's pool when the `parallel` feature is on and the batch is large enough to be
/// worth it.
#[inline]
pub fn map_ordered<T, R, F>(collection: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    {
        if collection.len() > PARALLEL_THRESHOLD {
            collection.par_iter().map(f).collect()
        } else {
            collection.iter().map(f).collect()
        }
    }
    #[cfg(any(not(feature = "parallel"), target_arch = "wasm32"))]
    {
        collection.iter().map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_ordered_keeps_order() {
        let small: Vec<u32> = (0..5).collect();
        assert_eq!(map_ordered(&small, |x| x * 2), vec![0, 2, 4, 6, 8]);

        let large: Vec<u32> = (0..1000).collect();
        let doubled = map_ordered(&large, |x| x * 2);
        assert!(doubled.iter().enumerate().all(|(i, &v)| v == 2 * i as u32));
    }
}
