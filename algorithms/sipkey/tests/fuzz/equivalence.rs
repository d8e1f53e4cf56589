use bolero::check;
use sipkey::SipKey;

fn le_concat(words: &[u64]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

#[test]
fn fuzz_64bit_fast_paths() {
    check!()
        .with_type::<([u8; 16], u64, u64, u64, u64)>()
        .for_each(|(k, a, b, c, d)| {
            let key = SipKey::new(*k);

            // =================================================================
            // EACH ARITY VS BYTE PATH
            // =================================================================

            assert_eq!(key.digest_1x64(*a), key.digest(&le_concat(&[*a])));
            assert_eq!(key.digest_2x64(*a, *b), key.digest(&le_concat(&[*a, *b])));
            assert_eq!(
                key.digest_3x64(*a, *b, *c),
                key.digest(&le_concat(&[*a, *b, *c]))
            );
            assert_eq!(
                key.digest_4x64(*a, *b, *c, *d),
                key.digest(&le_concat(&[*a, *b, *c, *d]))
            );
        });
}

#[test]
fn fuzz_32bit_fast_paths() {
    check!()
        .with_type::<([u8; 16], u32, u32, u32)>()
        .for_each(|(k, a, b, c)| {
            let key = SipKey::new(*k);

            assert_eq!(key.digest_1x32(*a), key.digest(&a.to_le_bytes()));

            let mut bytes = Vec::with_capacity(12);
            bytes.extend_from_slice(&a.to_le_bytes());
            bytes.extend_from_slice(&b.to_le_bytes());
            bytes.extend_from_slice(&c.to_le_bytes());
            assert_eq!(
                key.digest_3x32(*a, *b, u64::from(*c)),
                Ok(key.digest(&bytes)),
                "3x32 fast path mismatch"
            );
        });
}

#[test]
fn fuzz_slice_key_matches_typed_key() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(key, data)| {
            let result = sipkey::digest(key, data);
            if key.len() == 16 {
                let typed = SipKey::from_slice(key).map(|k| k.digest(data));
                assert_eq!(result, typed);
            } else {
                assert_eq!(
                    result,
                    Err(sipkey::SipError::InvalidKeyLength { actual: key.len() })
                );
            }
        });
}
