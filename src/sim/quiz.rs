//! Arithmetic questions asked each time the snake eats an apple
//!
//! Operand ranges scale with difficulty except for multiplication, which
//! always sticks to the 1-12 times tables.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smallest gap between subtraction operands (keeps results non-negative)
pub const SUBTRACTION_MARGIN: i64 = 5;

/// Times-table bounds for multiplication (inclusive)
pub const TIMES_TABLE_MIN: i64 = 1;
pub const TIMES_TABLE_MAX: i64 = 12;

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "x",
        }
    }

    pub fn apply(&self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
        }
    }
}

/// A pending arithmetic question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub operator: Operator,
    pub lhs: i64,
    pub rhs: i64,
    answer: i64,
}

impl Question {
    pub fn new(operator: Operator, lhs: i64, rhs: i64) -> Self {
        Self {
            operator,
            lhs,
            rhs,
            answer: operator.apply(lhs, rhs),
        }
    }

    /// Roll a question for the given difficulty (1-based)
    pub fn generate<R: Rng>(rng: &mut R, difficulty: u32) -> Self {
        let span = 10 * i64::from(difficulty.max(1));
        match rng.random_range(0..3) {
            0 => {
                let lhs = rng.random_range(0..span);
                let rhs = rng.random_range(0..span);
                Self::new(Operator::Add, lhs, rhs)
            }
            1 => {
                let rhs = rng.random_range(0..span);
                let lhs = rng.random_range(rhs + SUBTRACTION_MARGIN..span + SUBTRACTION_MARGIN);
                Self::new(Operator::Subtract, lhs, rhs)
            }
            _ => {
                let lhs = rng.random_range(TIMES_TABLE_MIN..=TIMES_TABLE_MAX);
                let rhs = rng.random_range(TIMES_TABLE_MIN..=TIMES_TABLE_MAX);
                Self::new(Operator::Multiply, lhs, rhs)
            }
        }
    }

    pub fn answer(&self) -> i64 {
        self.answer
    }

    /// Prompt shown to the player
    pub fn text(&self) -> String {
        format!("What is {} {} {}?", self.lhs, self.operator.symbol(), self.rhs)
    }

    /// Compare raw player input against the stored answer.
    ///
    /// Unparsable input is simply a wrong answer.
    pub fn check(&self, raw: &str) -> bool {
        parse_answer(raw) == Some(self.answer)
    }
}

/// Read a leading integer from free-text input.
///
/// Leading/trailing whitespace is ignored, an optional sign is accepted and
/// parsing stops at the first non-digit ("12abc" reads 12, "3.9" reads 3).
pub fn parse_answer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_question_text() {
        assert_eq!(Question::new(Operator::Add, 3, 4).text(), "What is 3 + 4?");
        assert_eq!(
            Question::new(Operator::Subtract, 12, 7).text(),
            "What is 12 - 7?"
        );
        assert_eq!(
            Question::new(Operator::Multiply, 6, 9).text(),
            "What is 6 x 9?"
        );
    }

    #[test]
    fn test_check_answer() {
        let q = Question::new(Operator::Multiply, 6, 9);
        assert!(q.check("54"));
        assert!(q.check("  54 "));
        assert!(q.check("54abc"));
        assert!(!q.check("45"));
        assert!(!q.check(""));
        assert!(!q.check("fifty-four"));
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("-7"), Some(-7));
        assert_eq!(parse_answer("+7"), Some(7));
        assert_eq!(parse_answer("3.9"), Some(3));
        assert_eq!(parse_answer("-"), None);
        assert_eq!(parse_answer("abc"), None);
        assert_eq!(parse_answer("99999999999999999999999"), None);
    }

    #[test]
    fn test_all_operators_appear() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            match Question::generate(&mut rng, 1).operator {
                Operator::Add => seen[0] = true,
                Operator::Subtract => seen[1] = true,
                Operator::Multiply => seen[2] = true,
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_difficulty_one_subtraction_never_negative() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let mut checked = 0;
        for _ in 0..2000 {
            let q = Question::generate(&mut rng, 1);
            if q.operator == Operator::Subtract {
                assert!(q.lhs >= 5);
                assert!(q.lhs >= q.rhs + SUBTRACTION_MARGIN);
                assert!(q.lhs < 15);
                assert!(q.rhs < 10);
                assert!(q.answer() >= 0);
                checked += 1;
            }
        }
        assert!(checked > 0);
    }

    proptest! {
        #[test]
        fn prop_operands_in_range(seed in any::<u64>(), difficulty in 1u32..50) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let q = Question::generate(&mut rng, difficulty);
            let span = 10 * i64::from(difficulty);
            match q.operator {
                Operator::Add => {
                    prop_assert!((0..span).contains(&q.lhs));
                    prop_assert!((0..span).contains(&q.rhs));
                }
                Operator::Subtract => {
                    prop_assert!((0..span).contains(&q.rhs));
                    prop_assert!(q.lhs >= q.rhs + SUBTRACTION_MARGIN);
                    prop_assert!(q.lhs < span + SUBTRACTION_MARGIN);
                    prop_assert!(q.answer() >= SUBTRACTION_MARGIN);
                }
                Operator::Multiply => {
                    prop_assert!((1..=12).contains(&q.lhs));
                    prop_assert!((1..=12).contains(&q.rhs));
                }
            }
            prop_assert!(q.check(&q.answer().to_string()));
        }
    }
}
