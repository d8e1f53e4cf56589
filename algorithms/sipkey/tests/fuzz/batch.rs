use bolero::check;
use sipkey::SipKey;

#[test]
fn fuzz_batch_consistency() {
    check!()
        .with_type::<([u8; 16], Vec<Vec<u8>>)>()
        .for_each(|(k, inputs)| {
            let key = SipKey::new(*k);

            // =================================================================
            // BATCH (RAYON WHEN ENABLED)
            // =================================================================

            let batch = key.digest_batch(inputs);

            // =================================================================
            // SEQUENTIAL REFERENCE
            // =================================================================

            assert_eq!(batch.len(), inputs.len());
            for (input, tag) in inputs.iter().zip(&batch) {
                assert_eq!(*tag, key.digest(input), "Batch entry mismatch");
            }
        });
}
