// ==============================================
// SECOND-CHANCE EVICTION TESTS (integration)
// ==============================================
//
// Observable eviction behavior of SecondChanceCache through its public
// surface: capacity bounds, victim selection, second-chance grants, the
// swap-with-last removal path and lifecycle resets.

use std::collections::HashMap;

use clockbits::policy::second_chance::{AddOutcome, SecondChanceCache};

fn filled(capacity: usize) -> SecondChanceCache<String, usize> {
    let cache = SecondChanceCache::new(capacity);
    for i in 0..cache.capacity() {
        assert_eq!(cache.add(format!("key-{i}"), i), AddOutcome::Inserted);
    }
    cache
}

// ==============================================
// Capacity
// ==============================================

mod capacity {
    use super::*;

    #[test]
    fn capacity_is_positive_multiple_of_64() {
        for requested in [0usize, 1, 63, 64, 65, 127, 128, 1000] {
            let cache = SecondChanceCache::<u32, u32>::new(requested);
            let cap = cache.capacity();
            assert!(cap >= 64);
            assert_eq!(cap % 64, 0);
            assert!(cap >= requested);
            assert!(cap - requested.max(64) < 64);
        }
    }

    #[test]
    fn one_extra_key_evicts_exactly_one_entry() {
        let cache = filled(128);
        assert_eq!(cache.len(), 128);

        let outcome = cache.add("extra".to_string(), 999);
        let AddOutcome::Evicted { key, value } = outcome else {
            panic!("expected an eviction, got {:?}", outcome);
        };
        assert_eq!(key, format!("key-{value}"));
        assert!(!cache.contains(&key));
        assert!(cache.contains(&"extra".to_string()));
        assert_eq!(cache.len(), 128);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn len_matches_items_under_churn() {
        let cache = SecondChanceCache::new(64);
        for i in 0..1_000u32 {
            cache.insert(i % 150, i);
            if i % 7 == 0 {
                cache.remove(&(i % 40));
            }
            if i % 3 == 0 {
                cache.get(&(i % 90));
            }
            assert!(cache.len() <= cache.capacity());
        }
        let items: HashMap<_, _> = cache.items().collect();
        assert_eq!(items.len(), cache.len());
        for (key, value) in &items {
            assert_eq!(cache.peek_with(key, |v| *v), Some(*value));
        }
        cache.check_invariants().unwrap();
    }
}

// ==============================================
// Victim selection
// ==============================================

#[cfg(debug_assertions)]
mod victim_selection {
    use super::*;

    #[test]
    fn evicts_the_single_ejectable_slot() {
        let cache = filled(64);
        let victim_key = "key-5".to_string();
        assert_eq!(cache.debug_slot_of(&victim_key), Some(5));
        cache.debug_set_ejectable(5, true);

        let outcome = cache.add("key-64".to_string(), 64);
        assert_eq!(
            outcome,
            AddOutcome::Evicted {
                key: victim_key.clone(),
                value: 5
            }
        );
        assert!(!cache.contains(&victim_key));
        assert_eq!(cache.debug_slot_of(&"key-64".to_string()), Some(5));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn contains_does_not_protect_from_eviction() {
        let cache = filled(64);
        cache.debug_set_ejectable(9, true);

        assert!(cache.contains(&"key-9".to_string()));
        assert!(cache.debug_is_ejectable(9));

        let outcome = cache.add("new".to_string(), 0);
        assert_eq!(outcome.clone().into_prior(), Some(9));
        assert!(outcome.is_eviction());
        assert!(!cache.contains(&"key-9".to_string()));
    }

    #[test]
    fn get_protects_from_next_eviction() {
        let cache = filled(64);
        cache.debug_set_ejectable(9, true);

        assert_eq!(cache.get(&"key-9".to_string()), Some(9));
        assert!(!cache.debug_is_ejectable(9));

        let outcome = cache.add("new".to_string(), 0);
        assert!(outcome.is_eviction());
        assert!(cache.contains(&"key-9".to_string()));
    }

    #[test]
    fn referenced_entries_survive_one_full_pass() {
        let cache = filled(128);

        // First eviction refills every word, then takes slot 0.
        let first = cache.add("a".to_string(), 0);
        assert_eq!(first.into_prior(), Some(0));

        // Touch slot 1 so the next pass skips it.
        assert_eq!(cache.get(&"key-1".to_string()), Some(1));
        let second = cache.add("b".to_string(), 0);
        assert_eq!(second.into_prior(), Some(2));
        assert!(cache.contains(&"key-1".to_string()));
    }

    #[test]
    fn overwrite_is_distinguishable_from_eviction() {
        let cache = filled(64);
        let replaced = cache.add("key-3".to_string(), 300);
        assert_eq!(replaced, AddOutcome::Replaced(3));
        assert!(replaced.had_prior());
        assert!(!replaced.is_eviction());
        assert_eq!(cache.len(), 64);
        assert!(!cache.debug_is_ejectable(3));
    }
}

// ==============================================
// Removal
// ==============================================

mod removal {
    use super::*;

    #[test]
    fn remove_present_then_absent() {
        let cache = filled(64);
        assert_eq!(cache.remove(&"key-10".to_string()), Some(10));
        assert!(!cache.contains(&"key-10".to_string()));
        assert_eq!(cache.len(), 63);

        assert_eq!(cache.remove(&"key-10".to_string()), None);
        assert_eq!(cache.len(), 63);
        cache.check_invariants().unwrap();
    }

    #[cfg(debug_assertions)]
    #[test]
    fn last_entry_moves_with_its_bit() {
        let cache = filled(64);
        let last = "key-63".to_string();
        cache.debug_set_ejectable(63, true);

        assert_eq!(cache.remove(&"key-1".to_string()), Some(1));
        assert_eq!(cache.debug_slot_of(&last), Some(1));
        assert_eq!(cache.peek_with(&last, |v| *v), Some(63));
        assert!(cache.debug_is_ejectable(1));

        let outcome = cache.add("fresh".to_string(), 0);
        assert_eq!(outcome, AddOutcome::Inserted);
        assert_eq!(cache.debug_slot_of(&"fresh".to_string()), Some(63));

        // The moved entry is still the only ejectable one.
        let evicted = cache.add("next".to_string(), 0);
        assert_eq!(
            evicted,
            AddOutcome::Evicted {
                key: last,
                value: 63
            }
        );
        cache.check_invariants().unwrap();
    }

    #[test]
    fn drain_by_remove_leaves_empty_valid_cache() {
        let cache = filled(128);
        for i in (0..128).rev().step_by(2) {
            assert_eq!(cache.remove(&format!("key-{i}")), Some(i));
        }
        for i in (0..128).step_by(2) {
            assert_eq!(cache.remove(&format!("key-{i}")), Some(i));
        }
        assert!(cache.is_empty());
        assert_eq!(cache.items().count(), 0);
        cache.check_invariants().unwrap();
    }
}

// ==============================================
// Lifecycle
// ==============================================

mod lifecycle {
    use super::*;

    #[test]
    fn reset_is_idempotent() {
        let cache = filled(64);
        cache.add("evictor".to_string(), 0);

        cache.reset();
        let first: Vec<_> = cache.items().collect();
        cache.reset();
        let second: Vec<_> = cache.items().collect();

        assert!(first.is_empty());
        assert_eq!(first, second);
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.capacity(), 64);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn reset_cache_refills_like_new() {
        let cache = filled(64);
        cache.reset();
        for i in 0..64 {
            assert_eq!(cache.add(format!("again-{i}"), i), AddOutcome::Inserted);
        }
        assert!(cache.add("over".to_string(), 0).is_eviction());
    }

    #[test]
    fn init_discards_contents_and_resizes() {
        let cache = filled(64);
        cache.init(200);
        assert_eq!(cache.capacity(), 256);
        assert!(cache.is_empty());
        assert!(!cache.contains(&"key-0".to_string()));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn add_then_get_round_trips() {
        let cache = SecondChanceCache::new(64);
        cache.insert(7u8, vec![1, 2, 3]);
        assert_eq!(cache.get(&7), Some(vec![1, 2, 3]));
        assert_eq!(cache.get_with(&7, Vec::len), Some(3));
    }

    #[test]
    fn items_is_restartable() {
        let cache = SecondChanceCache::new(64);
        for i in 0..20u32 {
            cache.insert(i, i * i);
        }
        let mut first: Vec<_> = cache.items().collect();
        let mut second: Vec<_> = cache.items().collect();
        first.sort();
        second.sort();
        assert_eq!(first, second);
        assert_eq!(first.len(), 20);

        let partial: Vec<_> = cache.items().take(3).collect();
        assert_eq!(partial.len(), 3);
        cache.insert(100, 0);
        assert_eq!(cache.len(), 21);
    }
}
