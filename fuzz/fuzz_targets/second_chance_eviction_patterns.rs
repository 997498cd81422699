#![no_main]

use libfuzzer_sys::fuzz_target;
use clockbits::policy::second_chance::{AddOutcome, SecondChanceCore};

// Fuzz eviction patterns with reference bits
//
// Fills the core, then alternates between touching (get) or probing
// (contains) existing keys and inserting new ones, so every insert runs the
// clock sweep. The victim must be a previously cached key, must disappear,
// and the new key must land in its place.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let mut core = SecondChanceCore::new(64 * (1 + data[0] as usize % 3));
    let capacity = core.capacity() as u32;
    for i in 0..capacity {
        core.add(i, i);
    }

    let mut next_key = capacity;
    let mut idx = 1;
    while idx + 1 < data.len() {
        let key = data[idx] as u32 * 7 % next_key;
        if data[idx + 1] % 2 == 0 {
            let _ = core.get(&key);
        } else {
            let _ = core.contains(&key);
        }

        match core.add(next_key, next_key) {
            AddOutcome::Evicted { key: victim, value } => {
                assert_eq!(victim, value);
                assert!(victim < next_key);
                assert!(!core.contains(&victim));
            }
            outcome => panic!("full core must evict, got {:?}", outcome),
        }
        assert_eq!(core.peek(&next_key), Some(&next_key));
        next_key += 1;

        assert_eq!(core.len() as u32, capacity);
        idx += 2;
    }
});
