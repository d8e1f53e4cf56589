//! Generator for Sipkey regression vectors
//!
//! Regenerates `tests/test_vectors.json`:
//! `cargo run --example generate_test_vectors > tests/test_vectors.json`
#![allow(clippy::unwrap_used)]
use serde_json::{json, Value};
use sipkey::SipKey;

const KEY: [u8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

fn bytes_vector(key: &SipKey, name: &str, input: &[u8]) -> Value {
    json!({
        "name": name,
        "kind": "bytes",
        "input": hex::encode(input),
        "words": [],
        "tag": sipkey::to_hex(&key.digest(input))
    })
}

fn words_vector(name: &str, kind: &str, words: &[u64], tag: &sipkey::Tag) -> Value {
    json!({
        "name": name,
        "kind": kind,
        "input": "",
        "words": words,
        "tag": sipkey::to_hex(tag)
    })
}

fn main() {
    let key = SipKey::new(KEY);
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. BYTE STRINGS
    // =========================================================================

    // Empty input: only the length tag and key reach finalization
    vectors.push(bytes_vector(&key, "empty", b""));
    vectors.push(bytes_vector(&key, "one_byte", b"a"));
    vectors.push(bytes_vector(&key, "abc", b"abc"));
    // Largest tail without a full block
    vectors.push(bytes_vector(&key, "seven_bytes", b"abcdefg"));
    // Exactly one block, empty tail
    vectors.push(bytes_vector(&key, "one_block", b"abcdefgh"));
    vectors.push(bytes_vector(&key, "hello_world", b"hello, world!"));

    let sequential: Vec<u8> = (0u8..64).collect();
    vectors.push(bytes_vector(&key, "fifteen_sequential", &sequential[..15]));
    vectors.push(bytes_vector(&key, "sixty_four_sequential", &sequential));

    // Length tag wraps: 256 mod 256 == 0
    vectors.push(bytes_vector(&key, "zeros_256", &[0u8; 256]));
    vectors.push(bytes_vector(&key, "zeros_1000", &[0u8; 1000]));

    // =========================================================================
    // 2. INTEGER TUPLES
    // =========================================================================

    let a = 0x0123_4567_89ab_cdef;
    vectors.push(words_vector("one_u64", "1x64", &[a], &key.digest_1x64(a)));
    vectors.push(words_vector("two_u64", "2x64", &[1, 2], &key.digest_2x64(1, 2)));
    vectors.push(words_vector(
        "three_u64",
        "3x64",
        &[1, 2, 3],
        &key.digest_3x64(1, 2, 3),
    ));
    vectors.push(words_vector(
        "four_u64",
        "4x64",
        &[1, 2, 3, 4],
        &key.digest_4x64(1, 2, 3, 4),
    ));
    let m = u64::MAX;
    vectors.push(words_vector(
        "four_u64_max",
        "4x64",
        &[m, m, m, m],
        &key.digest_4x64(m, m, m, m),
    ));
    vectors.push(words_vector(
        "one_u32",
        "1x32",
        &[0xdead_beef],
        &key.digest_1x32(0xdead_beef),
    ));
    vectors.push(words_vector(
        "one_u32_max",
        "1x32",
        &[u64::from(u32::MAX)],
        &key.digest_1x32(u32::MAX),
    ));
    vectors.push(words_vector(
        "three_u32",
        "3x32",
        &[1, 2, 3],
        &key.digest_3x32(1, 2, 3).unwrap(),
    ));

    // =========================================================================
    // 3. EXTREME INPUTS
    // =========================================================================

    // Widest tail word accepted by the 3x32 path
    let wide = 0x00ff_ffff_ffff_ffff;
    vectors.push(words_vector(
        "three_u32_wide_tail",
        "3x32",
        &[1, 2, wide],
        &key.digest_3x32(1, 2, wide).unwrap(),
    ));

    let output = json!({ "key": hex::encode(KEY), "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
