//! Formal verification of scoring bounds using the Kani model checker.
//!
//! These proof harnesses verify the feedback properties for ALL possible
//! secret/guess pairs, not just sampled ones.

mod proofs {
    use crate::rules::score;
    use crate::secret::Secret;
    use crate::types::{Colour, ROW_LENGTH};

    /// Verify the consumption discipline: counts never exceed row length.
    #[kani::proof]
    fn verify_feedback_bounded() {
        let secret: Secret = kani::any();
        let guess: [Colour; ROW_LENGTH] = kani::any();

        let feedback = score(&secret, &guess);

        assert!(feedback.exact() + feedback.colour() <= ROW_LENGTH as u8);
    }

    /// Verify that four exact hits occur exactly when the guess equals the
    /// secret slot by slot.
    #[kani::proof]
    fn verify_exact_iff_equal() {
        let secret: Secret = kani::any();
        let guess: [Colour; ROW_LENGTH] = kani::any();

        let feedback = score(&secret, &guess);

        assert_eq!(feedback.is_win(), *secret.colours() == guess);
    }
}
