//! Classified result of one scored guess.

use serde::{Deserialize, Serialize};

/// Result of a valid guess.
///
/// Correctness takes precedence over exhaustion: a correct guess on the
/// final attempt is `Correct`, never a last-attempt variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The guess equals the secret.
    Correct,
    /// Below the secret, attempts remain.
    TooLow,
    /// Above the secret, attempts remain.
    TooHigh,
    /// Below the secret on the final attempt; the session is lost.
    LastAttemptTooLow,
    /// Above the secret on the final attempt; the session is lost.
    LastAttemptTooHigh,
}

impl Outcome {
    /// Does this outcome finish the session?
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Outcome::TooLow | Outcome::TooHigh)
    }

    /// Was the secret found?
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::Correct)
    }

    /// Human-readable description, used by every text surface.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Outcome::Correct => "You won!",
            Outcome::TooLow => "Your guess is too small",
            Outcome::TooHigh => "Your guess is too big",
            Outcome::LastAttemptTooLow => "Your guess is too small. You lost: no attempts left",
            Outcome::LastAttemptTooHigh => "Your guess is too big. You lost: no attempts left",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_outcomes() {
        assert!(Outcome::Correct.is_final());
        assert!(Outcome::LastAttemptTooLow.is_final());
        assert!(Outcome::LastAttemptTooHigh.is_final());
        assert!(!Outcome::TooLow.is_final());
        assert!(!Outcome::TooHigh.is_final());
    }

    #[test]
    fn test_only_correct_wins() {
        assert!(Outcome::Correct.is_win());
        assert!(!Outcome::LastAttemptTooHigh.is_win());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Outcome::LastAttemptTooLow).unwrap();
        assert_eq!(json, "\"LastAttemptTooLow\"");
        assert_eq!(serde_json::from_str::<Outcome>(&json).unwrap(), Outcome::LastAttemptTooLow);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Outcome::TooLow), "Your guess is too small");
    }
}
