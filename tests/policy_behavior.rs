// ==============================================
// FIFO / LRU BEHAVIOR TESTS (integration)
// ==============================================
//
// Drives the public API through the put/get sequences that define the two
// policies: insertion-order eviction, promotion on read, refresh on update,
// and failure on miss.

use boundcache::prelude::*;

fn loaded(policy: EvictionPolicy) -> BoundedCache<u32, String> {
    let mut cache = BoundedCache::new(3, policy);
    cache.put(1, "one".to_string());
    cache.put(2, "two".to_string());
    cache.put(3, "three".to_string());
    cache
}

fn get_str(cache: &mut BoundedCache<u32, String>, key: u32) -> Result<&str, CacheError> {
    cache.get(&key).map(String::as_str)
}

// ==============================================
// FIFO
// ==============================================

mod fifo {
    use super::*;

    #[test]
    fn evicts_first_inserted_key() {
        let mut cache = loaded(EvictionPolicy::Fifo);
        assert_eq!(get_str(&mut cache, 1), Ok("one"));
        assert_eq!(get_str(&mut cache, 2), Ok("two"));
        assert_eq!(get_str(&mut cache, 3), Ok("three"));

        cache.put(4, "four".to_string());

        assert_eq!(get_str(&mut cache, 1), Err(CacheError::KeyNotFound));
        assert_eq!(get_str(&mut cache, 2), Ok("two"));
        assert_eq!(get_str(&mut cache, 3), Ok("three"));
        assert_eq!(get_str(&mut cache, 4), Ok("four"));
    }

    #[test]
    fn update_overwrites_value() {
        let mut cache = loaded(EvictionPolicy::Fifo);
        cache.put(4, "four".to_string());
        cache.put(2, "two-updated".to_string());
        assert_eq!(get_str(&mut cache, 2), Ok("two-updated"));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn reads_never_change_eviction_order() {
        let mut cache = loaded(EvictionPolicy::Fifo);
        for _ in 0..3 {
            assert_eq!(get_str(&mut cache, 1), Ok("one"));
        }
        cache.put(4, "four".to_string());
        assert!(!cache.contains(&1));

        let _ = get_str(&mut cache, 2);
        cache.put(5, "five".to_string());
        assert!(!cache.contains(&2));
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![5, 4, 3]);
    }

    #[test]
    fn update_refresh_delays_eviction() {
        let mut cache = loaded(EvictionPolicy::Fifo);
        cache.put(1, "one-updated".to_string());

        cache.put(4, "four".to_string());
        cache.put(5, "five".to_string());
        assert!(!cache.contains(&2));
        assert!(!cache.contains(&3));
        assert_eq!(get_str(&mut cache, 1), Ok("one-updated"));

        cache.put(6, "six".to_string());
        assert!(!cache.contains(&1));
    }
}

// ==============================================
// LRU
// ==============================================

mod lru {
    use super::*;

    #[test]
    fn read_promotes_entry_past_eviction() {
        let mut cache = loaded(EvictionPolicy::Lru);
        assert_eq!(get_str(&mut cache, 1), Ok("one"));
        assert_eq!(get_str(&mut cache, 2), Ok("two"));
        assert_eq!(get_str(&mut cache, 3), Ok("three"));

        cache.put(4, "four".to_string());
        assert_eq!(get_str(&mut cache, 1), Err(CacheError::KeyNotFound));
        assert_eq!(get_str(&mut cache, 2), Ok("two"));
        assert_eq!(get_str(&mut cache, 3), Ok("three"));
        assert_eq!(get_str(&mut cache, 4), Ok("four"));

        cache.put(2, "two-updated".to_string());
        assert_eq!(get_str(&mut cache, 2), Ok("two-updated"));

        assert_eq!(get_str(&mut cache, 3), Ok("three"));
        cache.put(5, "five".to_string());

        assert_eq!(get_str(&mut cache, 4), Err(CacheError::KeyNotFound));
        assert_eq!(get_str(&mut cache, 2), Ok("two-updated"));
        assert_eq!(get_str(&mut cache, 5), Ok("five"));
        assert_eq!(get_str(&mut cache, 3), Ok("three"));
    }

    #[test]
    fn repeated_get_returns_same_value_and_keeps_front() {
        let mut cache = loaded(EvictionPolicy::Lru);
        assert_eq!(get_str(&mut cache, 1), Ok("one"));
        assert_eq!(get_str(&mut cache, 1), Ok("one"));
        assert_eq!(cache.keys().next(), Some(&1));
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
    }

    #[test]
    fn updated_entry_is_evicted_last() {
        let mut cache = loaded(EvictionPolicy::Lru);
        cache.put(1, "uno".to_string());

        cache.put(4, "four".to_string());
        cache.put(5, "five".to_string());
        assert!(cache.contains(&1));

        cache.put(6, "six".to_string());
        assert!(!cache.contains(&1));
    }
}

// ==============================================
// Shared properties
// ==============================================

mod shared {
    use super::*;

    #[test]
    fn miss_leaves_state_untouched() {
        for policy in [EvictionPolicy::Fifo, EvictionPolicy::Lru] {
            let mut cache = loaded(policy);
            let before: Vec<_> = cache.keys().copied().collect();

            assert_eq!(get_str(&mut cache, 42), Err(CacheError::KeyNotFound));

            assert_eq!(cache.keys().copied().collect::<Vec<_>>(), before);
            assert_eq!(cache.len(), 3);
        }
    }

    #[test]
    fn evicted_key_stays_missing_until_reinserted() {
        for policy in [EvictionPolicy::Fifo, EvictionPolicy::Lru] {
            let mut cache = loaded(policy);
            cache.put(4, "four".to_string());
            assert_eq!(get_str(&mut cache, 1), Err(CacheError::KeyNotFound));

            cache.put(1, "one-again".to_string());
            assert_eq!(get_str(&mut cache, 1), Ok("one-again"));
            assert_eq!(cache.len(), 3);
        }
    }

    #[test]
    fn capacity_holds_under_sequential_load() {
        for policy in [EvictionPolicy::Fifo, EvictionPolicy::Lru] {
            let mut cache = CacheBuilder::new(5).policy(policy).build::<u64, u64>();
            for i in 0..1_000u64 {
                cache.put(i % 37, i);
                assert!(cache.len() <= cache.capacity());
            }
            assert_eq!(cache.len(), 5);
            #[cfg(debug_assertions)]
            cache.check_invariants().unwrap();
        }
    }

    #[test]
    fn generic_read_only_view() {
        fn fill_ratio<C: ReadOnlyCache<u32>>(cache: &C) -> f64 {
            cache.len() as f64 / cache.capacity() as f64
        }

        let cache = loaded(EvictionPolicy::Lru);
        assert_eq!(fill_ratio(&cache), 1.0);
        assert!(!ReadOnlyCache::is_empty(&cache));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(
            BoundedCache::<u32, u32>::try_new(0, EvictionPolicy::Fifo).unwrap_err(),
            CacheError::InvalidCapacity { capacity: 0 }
        );
        assert!(CacheBuilder::new(0).try_build::<u32, u32>().is_err());
    }
}
