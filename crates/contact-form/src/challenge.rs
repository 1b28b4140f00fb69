//! Arithmetic anti-bot challenge
//!
//! A `Challenge` owns both the rendered question and the expected answer.
//! The answer is only reachable through [`Challenge::check`], and the
//! `Debug` impl prints the question alone.

use contact_form_validation::validate_challenge_answer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Smallest operand
pub const MIN_OPERAND: u8 = 1;
/// Largest operand
pub const MAX_OPERAND: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
        }
    }

    fn apply(&self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
        }
    }
}

/// A question/answer pair such as `"7 - 3 = ?"` / `4`
#[derive(Clone, PartialEq, Eq)]
pub struct Challenge {
    lhs: u8,
    operator: Operator,
    rhs: u8,
    question: String,
    expected: i64,
}

impl Challenge {
    /// Build a challenge from its parts
    ///
    /// Subtraction operands are reordered so the larger one comes first and
    /// the answer is never negative.
    pub fn new(a: u8, operator: Operator, b: u8) -> Self {
        let (lhs, rhs) = match operator {
            Operator::Subtract => (a.max(b), a.min(b)),
            _ => (a, b),
        };
        let expected = operator.apply(i64::from(lhs), i64::from(rhs));
        let question = format!("{} {} {} = ?", lhs, operator.symbol(), rhs);

        Self {
            lhs,
            operator,
            rhs,
            question,
            expected,
        }
    }

    /// Text to render next to the answer input
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operands(&self) -> (u8, u8) {
        (self.lhs, self.rhs)
    }

    /// Check a typed answer; `None` when it is correct
    pub fn check(&self, answer: &str) -> Option<String> {
        validate_challenge_answer(answer, self.expected)
    }

    #[cfg(test)]
    pub(crate) fn expected_answer(&self) -> i64 {
        self.expected
    }
}

impl fmt::Debug for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Challenge")
            .field("question", &self.question)
            .finish_non_exhaustive()
    }
}

/// Pick two operands in [1,10] and a random operator
pub fn generate() -> Challenge {
    generate_with(&mut rand::thread_rng())
}

/// Like [`generate`] but drawing from the given RNG
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Challenge {
    let a = rng.gen_range(MIN_OPERAND..=MAX_OPERAND);
    let b = rng.gen_range(MIN_OPERAND..=MAX_OPERAND);
    let operator = Operator::ALL[rng.gen_range(0..Operator::ALL.len())];
    Challenge::new(a, operator, b)
}

/// Supplies a fresh challenge whenever the controller needs one
pub trait ChallengeSource {
    fn next_challenge(&mut self) -> Challenge;
}

/// Random challenges from a seedable RNG
pub struct RandomChallenges<R = StdRng> {
    rng: R,
}

impl RandomChallenges<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence, for tests and demos
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomChallenges<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomChallenges<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> ChallengeSource for RandomChallenges<R> {
    fn next_challenge(&mut self) -> Challenge {
        generate_with(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtraction_reorders_operands() {
        let challenge = Challenge::new(3, Operator::Subtract, 9);
        assert_eq!(challenge.question(), "9 - 3 = ?");
        assert_eq!(challenge.expected_answer(), 6);
        assert_eq!(challenge.operands(), (9, 3));
    }

    #[test]
    fn test_question_format() {
        assert_eq!(Challenge::new(2, Operator::Add, 5).question(), "2 + 5 = ?");
        assert_eq!(Challenge::new(4, Operator::Multiply, 6).question(), "4 × 6 = ?");
    }

    #[test]
    fn test_check() {
        let challenge = Challenge::new(4, Operator::Multiply, 6);
        assert_eq!(challenge.check("24"), None);
        assert!(challenge.check("25").is_some());
        assert!(challenge.check("").is_some());
    }

    #[test]
    fn test_subtraction_never_negative() {
        let mut source = RandomChallenges::seeded(7);
        let mut subtractions = 0;
        while subtractions < 100 {
            let challenge = source.next_challenge();
            if challenge.operator() == Operator::Subtract {
                subtractions += 1;
                assert!(challenge.expected_answer() >= 0, "{:?}", challenge);
            }
        }
    }

    #[test]
    fn test_every_pair_subtracts_non_negative() {
        for a in MIN_OPERAND..=MAX_OPERAND {
            for b in MIN_OPERAND..=MAX_OPERAND {
                assert!(Challenge::new(a, Operator::Subtract, b).expected_answer() >= 0);
            }
        }
    }

    #[test]
    fn test_operands_in_range() {
        let mut source = RandomChallenges::seeded(42);
        for _ in 0..500 {
            let (lhs, rhs) = source.next_challenge().operands();
            assert!((MIN_OPERAND..=MAX_OPERAND).contains(&lhs));
            assert!((MIN_OPERAND..=MAX_OPERAND).contains(&rhs));
        }
    }

    #[test]
    fn test_question_never_contains_answer_marker() {
        let mut source = RandomChallenges::seeded(3);
        for _ in 0..200 {
            let challenge = source.next_challenge();
            assert!(challenge.question().ends_with("= ?"));
            let debug = format!("{:?}", challenge);
            assert!(!debug.contains("expected"));
        }
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = RandomChallenges::seeded(11);
        let mut b = RandomChallenges::seeded(11);
        for _ in 0..20 {
            assert_eq!(a.next_challenge(), b.next_challenge());
        }
    }
}
