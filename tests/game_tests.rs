//! Game state machine scenario tests.
//!
//! The secret is never exposed, so each test finds it by probing clones of
//! the game, which share the secret but not the attempt counter.

use draw_number::{Configuration, DrawNumber, GameRng, GuessError, Outcome, Phase};

fn new_game(minimum: i64, maximum: i64, attempts: u32, seed: u64) -> DrawNumber {
    let config = Configuration::new(minimum, maximum, attempts).unwrap();
    DrawNumber::new(&config, GameRng::new(seed))
}

fn find_secret(game: &DrawNumber) -> i64 {
    let bounds = game.bounds();
    (bounds.minimum()..=bounds.maximum())
        .find(|&n| game.clone().evaluate_guess(n) == Ok(Outcome::Correct))
        .expect("secret lies within the bounds")
}

/// First seed whose secret satisfies `pred`.
fn game_where(pred: impl Fn(i64) -> bool) -> DrawNumber {
    (0..10_000)
        .map(|seed| new_game(1, 10, 3, seed))
        .find(|game| pred(find_secret(game)))
        .expect("some seed satisfies the predicate")
}

fn expected(guess: i64, secret: i64) -> Outcome {
    match guess.cmp(&secret) {
        std::cmp::Ordering::Less => Outcome::TooLow,
        std::cmp::Ordering::Greater => Outcome::TooHigh,
        std::cmp::Ordering::Equal => Outcome::Correct,
    }
}

// =============================================================================
// Scenarios
// =============================================================================

/// Test that guesses 5, 8 and then the secret win on the last attempt (1..10, 3 attempts).
#[test]
fn test_two_misses_then_correct() {
    let mut game = game_where(|s| s != 5 && s != 8);
    let secret = find_secret(&game);

    assert_eq!(game.evaluate_guess(5), Ok(expected(5, secret)));
    assert_eq!(game.evaluate_guess(8), Ok(expected(8, secret)));
    assert_eq!(game.remaining_attempts(), 1);

    assert_eq!(game.evaluate_guess(secret), Ok(Outcome::Correct));
    assert_eq!(game.phase(), Phase::Finished);
}

/// Test that three misses exhaust the game and a fourth guess is rejected.
#[test]
fn test_exhaustion_then_invalid_state() {
    let mut game = game_where(|s| s != 5 && s != 8 && s != 2);
    let secret = find_secret(&game);

    game.evaluate_guess(5).unwrap();
    game.evaluate_guess(8).unwrap();
    let last = game.evaluate_guess(2).unwrap();

    let want = if 2 < secret {
        Outcome::LastAttemptTooLow
    } else {
        Outcome::LastAttemptTooHigh
    };
    assert_eq!(last, want);
    assert!(game.is_finished());

    assert_eq!(game.evaluate_guess(secret), Err(GuessError::InvalidState));
    assert_eq!(game.remaining_attempts(), 0);
}

/// Test that out-of-range guesses between valid ones leave the attempts alone.
#[test]
fn test_out_of_range_between_guesses() {
    let mut game = game_where(|s| s != 5);

    game.evaluate_guess(5).unwrap();
    assert!(matches!(game.evaluate_guess(0), Err(GuessError::OutOfRange { .. })));
    assert!(matches!(game.evaluate_guess(11), Err(GuessError::OutOfRange { .. })));
    assert_eq!(game.remaining_attempts(), 2);
    assert_eq!(game.phase(), Phase::Active);
}

/// Test that a finished game can be played again after reset.
#[test]
fn test_reset_after_win_plays_again() {
    let mut game = new_game(1, 10, 3, 42);
    let secret = find_secret(&game);
    game.evaluate_guess(secret).unwrap();
    assert!(game.is_finished());

    game.reset();

    assert_eq!(game.phase(), Phase::Active);
    assert_eq!(game.remaining_attempts(), 3);
    let new_secret = find_secret(&game);
    assert_eq!(game.evaluate_guess(new_secret), Ok(Outcome::Correct));
}

// =============================================================================
// Distribution
// =============================================================================

/// Test that secrets drawn across many resets cover the range evenly.
#[test]
fn test_reset_draws_independent_secrets() {
    let mut game = new_game(1, 10, 3, 2024);
    let mut counts = [0u32; 10];

    for _ in 0..2000 {
        game.reset();
        counts[(find_secret(&game) - 1) as usize] += 1;
    }

    // Uniform would be 200 each; allow generous slack
    for (value, &count) in counts.iter().enumerate() {
        assert!(
            (100..=300).contains(&count),
            "value {} drawn {} times: {:?}",
            value + 1,
            count,
            counts
        );
    }
}

/// Test that the same seed replays the same session.
#[test]
fn test_same_seed_replays_session() {
    let mut first = new_game(1, 1_000_000, 5, 99);
    let mut second = new_game(1, 1_000_000, 5, 99);

    for guess in [10, 500_000, 999_999] {
        assert_eq!(first.evaluate_guess(guess), second.evaluate_guess(guess));
    }
    first.reset();
    second.reset();
    assert_eq!(find_secret_fast(&first), find_secret_fast(&second));
}

/// Binary search via TooLow/TooHigh on clones, for wide ranges.
fn find_secret_fast(game: &DrawNumber) -> i64 {
    let (mut lo, mut hi) = (game.bounds().minimum(), game.bounds().maximum());
    loop {
        let mid = lo + (hi - lo) / 2;
        match game.clone().evaluate_guess(mid).unwrap() {
            Outcome::Correct => return mid,
            Outcome::TooLow | Outcome::LastAttemptTooLow => lo = mid + 1,
            Outcome::TooHigh | Outcome::LastAttemptTooHigh => hi = mid - 1,
        }
    }
}
