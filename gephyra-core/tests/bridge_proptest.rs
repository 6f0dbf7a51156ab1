//! Property-based tests for the console byte accumulator.
//! Verifies invariants hold for ALL valid inputs, not just fixed examples.

use gephyra_core::{ConsoleBridge, EXCHANGE_LEN};

proptest::proptest! {
    /// Every full batch comes out exactly as it went in, in arrival
    /// order, with the remainder still pending.
    #[test]
    fn accept_preserves_arrival_order(
        bytes in proptest::collection::vec(0u8..=255, 0..64),
    ) {
        let mut bridge = ConsoleBridge::new();
        let mut emitted = Vec::new();

        for &b in &bytes {
            if let Some(payload) = bridge.accept(b) {
                emitted.extend_from_slice(&payload);
            }
        }

        let full_batches = bytes.len() / EXCHANGE_LEN;
        assert_eq!(emitted.len(), full_batches * EXCHANGE_LEN);
        assert_eq!(&emitted[..], &bytes[..full_batches * EXCHANGE_LEN]);
        assert_eq!(bridge.pending(), bytes.len() % EXCHANGE_LEN);
    }

    /// A payload appears exactly on every tenth byte, never in between.
    #[test]
    fn accept_yields_only_on_boundary(n in 1usize..100) {
        let mut bridge = ConsoleBridge::new();

        for i in 0..n {
            let out = bridge.accept(i as u8);
            if (i + 1) % EXCHANGE_LEN == 0 {
                assert!(out.is_some(), "byte {} should complete a batch", i);
            } else {
                assert!(out.is_none(), "byte {} should not complete a batch", i);
            }
        }
    }
}
