#![no_main]

use libfuzzer_sys::fuzz_target;
use sipkey::SipKey;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // First 16 bytes are the key, the rest is split into words
    if data.len() < 16 {
        return;
    }
    let mut k = [0u8; 16];
    k.copy_from_slice(&data[..16]);
    let key = SipKey::new(k);
    let msg = &data[16..];

    // =============================================================================
    // 1. 64-BIT FAST PATHS
    // =============================================================================

    let words: Vec<u64> = msg
        .chunks_exact(8)
        .take(4)
        .map(|c| {
            let mut w = [0u8; 8];
            w.copy_from_slice(c);
            u64::from_le_bytes(w)
        })
        .collect();
    let prefix = &msg[..words.len() * 8];

    let fast = match words.as_slice() {
        [] => None,
        [a] => Some(key.digest_1x64(*a)),
        [a, b] => Some(key.digest_2x64(*a, *b)),
        [a, b, c] => Some(key.digest_3x64(*a, *b, *c)),
        [a, b, c, d, ..] => Some(key.digest_4x64(*a, *b, *c, *d)),
    };
    if let Some(tag) = fast {
        assert_eq!(tag, key.digest(prefix), "64-bit fast path mismatch");
    }

    // =============================================================================
    // 2. 32-BIT FAST PATHS
    // =============================================================================

    if msg.len() >= 12 {
        let word = |i: usize| u32::from_le_bytes([msg[i], msg[i + 1], msg[i + 2], msg[i + 3]]);
        let (a, b, c) = (word(0), word(4), word(8));

        assert_eq!(key.digest_1x32(a), key.digest(&msg[..4]), "1x32 mismatch");
        assert_eq!(
            key.digest_3x32(a, b, u64::from(c)),
            Ok(key.digest(&msg[..12])),
            "3x32 mismatch"
        );
    }
});
