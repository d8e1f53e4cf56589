#![no_main]

use libfuzzer_sys::fuzz_target;
use sipkey::{digest, verify, SipError};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // Split input: first byte picks the key length, so bad keys get fuzzed too
    let Some((&key_len, rest)) = data.split_first() else {
        return;
    };
    let key_len = usize::from(key_len % 33).min(rest.len());
    let (key, msg) = rest.split_at(key_len);

    // =============================================================================
    // 1. KEY VALIDATION
    // =============================================================================

    let result = digest(key, msg);
    if key.len() != 16 {
        assert_eq!(
            result,
            Err(SipError::InvalidKeyLength { actual: key.len() }),
            "Bad key accepted"
        );
        return;
    }
    let Ok(tag) = result else {
        panic!("16-byte key rejected");
    };

    // =============================================================================
    // 2. VERIFICATION
    // =============================================================================

    assert_eq!(verify(key, msg, &tag), Ok(true), "Correct tag rejected");

    let mut wrong_key = [0u8; 16];
    wrong_key.copy_from_slice(key);
    wrong_key[0] ^= 0xFF;
    assert_eq!(verify(&wrong_key, msg, &tag), Ok(false), "Wrong key accepted");

    // =============================================================================
    // 3. LENGTH BINDING
    // =============================================================================

    let mut extended = msg.to_vec();
    extended.push(0);
    assert_ne!(digest(key, &extended), Ok(tag), "Zero extension collided");
});
