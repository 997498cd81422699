#![no_main]

use libfuzzer_sys::fuzz_target;
use clockbits::policy::second_chance::SecondChanceCore;

// Fuzz arbitrary operation sequences on SecondChanceCore
//
// Tests random sequences of add, get, peek, contains, remove, reset and init
// operations and checks every structural invariant after each step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let mut core = SecondChanceCore::new(data[0] as usize * 2);

    let mut idx = 1;
    while idx + 2 < data.len() {
        let op = data[idx] % 16;
        let key = data[idx + 1] as u16 | ((op as u16 & 1) << 8);
        let value = data[idx + 2] as u32;

        match op {
            0..=6 => {
                let _ = core.add(key, value);
            }
            7..=9 => {
                let _ = core.get(&key);
            }
            10 => {
                let _ = core.peek(&key);
            }
            11 => {
                let _ = core.contains(&key);
            }
            12 | 13 => {
                let _ = core.remove(&key);
            }
            14 => core.reset(),
            15 => core.init(value as usize),
            _ => unreachable!(),
        }

        if let Err(err) = core.check_invariants() {
            panic!("invariant violated after op {}: {}", op, err);
        }
        assert!(core.len() <= core.capacity());

        idx += 3;
    }
});
