//! Property-Based Tests for Cache Module
//!
//! Drives the store with random operation sequences and checks it against a
//! plain `HashMap` model.

use proptest::prelude::*;
use std::collections::HashMap;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::{Store, TtlStatus};

// == Strategies ==
/// Small key alphabet so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,2}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum StoreOp {
    Set { key: String, value: i64 },
    Get { key: String },
    Del { key: String },
    Expire { key: String, ttl: i64 },
}

/// TTLs are either non-positive (delete) or far in the future, so no entry
/// lapses while a sequence runs.
fn ttl_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![-5i64..=0, 3600i64..=86_400, Just(i64::MAX)]
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        (key_strategy(), any::<i64>()).prop_map(|(key, value)| StoreOp::Set { key, value }),
        key_strategy().prop_map(|key| StoreOp::Get { key }),
        key_strategy().prop_map(|key| StoreOp::Del { key }),
        (key_strategy(), ttl_strategy()).prop_map(|(key, ttl)| StoreOp::Expire { key, ttl }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Every observable result matches a model map where expire(k, t <= 0)
    // behaves as del and expire(k, t > 0) keeps the value.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(store_op_strategy(), 1..80)) {
        let store = Store::new();
        let mut model: HashMap<String, i64> = HashMap::new();

        for op in ops {
            match op {
                StoreOp::Set { key, value } => {
                    store.set(&key, value);
                    model.insert(key, value);
                }
                StoreOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(&key).copied());
                }
                StoreOp::Del { key } => {
                    prop_assert_eq!(store.del(&key), model.remove(&key).is_some());
                }
                StoreOp::Expire { key, ttl } => {
                    let existed = model.contains_key(&key);
                    if ttl <= 0 {
                        model.remove(&key);
                    }
                    prop_assert_eq!(store.expire(&key, ttl), existed);
                }
            }
            prop_assert_eq!(store.len(), model.len());
        }

        // Nothing has lapsed, so a sweep is a no-op
        prop_assert_eq!(store.sweep_expired(), 0);
        prop_assert_eq!(store.len(), model.len());
    }

    // Lookup counters account for every get.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(store_op_strategy(), 1..50)) {
        let store = Store::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                StoreOp::Set { key, value } => store.set(&key, value),
                StoreOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                StoreOp::Del { key } => {
                    store.del(&key);
                }
                StoreOp::Expire { key, ttl } => {
                    store.expire(&key, ttl);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }

    // set always discards a previously configured TTL.
    #[test]
    fn prop_set_clears_ttl(key in key_strategy(), first in any::<i64>(), second in any::<i64>(), ttl in 1i64..=86_400) {
        let store = Store::new();

        store.set(&key, first);
        prop_assert!(store.expire(&key, ttl));
        store.set(&key, second);

        prop_assert_eq!(store.ttl(&key), TtlStatus::Persistent);
        prop_assert_eq!(store.get(&key), Some(second));
    }
}

// Fewer cases for tests that wait on the clock
proptest! {
    #![proptest_config(ProptestConfig::with_cases(3))]

    // After a TTL lapses the key reads as absent whether or not a sweep ran,
    // and a sweep removes exactly the lapsed keys.
    #[test]
    fn prop_lapsed_keys_disappear(
        expiring in prop::collection::hash_set("[a-z]{1,8}", 1..10),
        persistent in prop::collection::hash_set("[A-Z]{1,8}", 0..10)
    ) {
        let store = Store::new();

        for key in &expiring {
            store.set(key, 1);
            prop_assert!(store.expire(key, 1));
        }
        for key in &persistent {
            store.set(key, 2);
        }

        sleep(Duration::from_millis(1100));

        let probe = expiring.iter().next().unwrap();
        prop_assert_eq!(store.get(probe), None);

        prop_assert_eq!(store.sweep_expired(), expiring.len() - 1);
        prop_assert_eq!(store.len(), persistent.len());
        for key in &persistent {
            prop_assert_eq!(store.get(key), Some(2));
        }
    }
}
