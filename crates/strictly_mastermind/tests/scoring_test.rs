//! Property-style tests for guess scoring.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_mastermind::{Colour, Feedback, ROW_LENGTH, Secret, score};

fn random_colours(rng: &mut StdRng) -> [Colour; ROW_LENGTH] {
    let mut colours = [Colour::Red; ROW_LENGTH];
    for colour in &mut colours {
        *colour = Colour::ALL[rng.gen_range(0..Colour::ALL.len())];
    }
    colours
}

#[test]
fn test_counts_stay_bounded_for_random_pairs() {
    let mut rng = StdRng::seed_from_u64(2020);

    for _ in 0..1000 {
        let secret_colours = random_colours(&mut rng);
        let guess = random_colours(&mut rng);
        let secret = Secret::from_colours(secret_colours);

        let feedback = score(&secret, &guess);
        let total = feedback.exact() as usize + feedback.colour() as usize;

        assert!(total <= ROW_LENGTH, "{feedback} exceeds the row length");
        assert_eq!(
            feedback.exact() as usize == ROW_LENGTH,
            secret_colours == guess,
            "four exact hits must mean the guess equals the secret"
        );
    }
}

#[test]
fn test_guessing_the_secret_scores_four_exact() {
    let mut rng = StdRng::seed_from_u64(31);

    for _ in 0..100 {
        let colours = random_colours(&mut rng);
        let feedback = score(&Secret::from_colours(colours), &colours);
        assert_eq!(feedback, Feedback::new(4, 0));
    }
}

#[test]
fn test_duplicate_redistribution() {
    let secret = Secret::from_colours([Colour::Red, Colour::Red, Colour::Blue, Colour::Green]);
    let guess = [Colour::Red, Colour::Blue, Colour::Red, Colour::Purple];

    assert_eq!(score(&secret, &guess), Feedback::new(1, 2));
}

#[test]
fn test_colour_hits_capped_by_secret_multiplicity() {
    // Only one red in the secret, so the three extra reds in the guess
    // score nothing.
    let secret = Secret::from_colours([Colour::Red, Colour::Green, Colour::Blue, Colour::Yellow]);
    let guess = [Colour::Yellow, Colour::Red, Colour::Red, Colour::Red];

    assert_eq!(score(&secret, &guess), Feedback::new(0, 2));
}

#[test]
fn test_feedback_serializes_for_frontends() {
    let feedback = Feedback::new(1, 2);
    let encoded = serde_json::to_string(&feedback).expect("feedback serializes");
    assert_eq!(encoded, r#"{"exact":1,"colour":2}"#);

    let decoded: Feedback = serde_json::from_str(&encoded).expect("feedback deserializes");
    assert_eq!(decoded, feedback);
}
