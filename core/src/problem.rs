use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    pub const fn symbol(self) -> &'static str {
        use Operator::*;
        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "÷",
        }
    }

    /// Integer result of `lhs op rhs`, or `None` on overflow, division by zero, or a division with a remainder.
    pub fn apply(self, lhs: i32, rhs: i32) -> Option<i32> {
        use Operator::*;
        match self {
            Add => lhs.checked_add(rhs),
            Sub => lhs.checked_sub(rhs),
            Mul => lhs.checked_mul(rhs),
            Div => match lhs.checked_rem(rhs) {
                Some(0) => lhs.checked_div(rhs),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or(GameError::InvalidFace)
    }
}

/// A target expression `operand1 operator operand2 = result`. Only the result is shown to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    operand1: i32,
    operand2: i32,
    operator: Operator,
    result: i32,
}

impl Problem {
    pub fn new(operand1: i32, operator: Operator, operand2: i32) -> Result<Self> {
        if operand1 == operand2 {
            return Err(GameError::InvalidProblem);
        }
        let result = operator
            .apply(operand1, operand2)
            .ok_or(GameError::InvalidProblem)?;
        Ok(Self {
            operand1,
            operand2,
            operator,
            result,
        })
    }

    pub fn operand1(&self) -> i32 {
        self.operand1
    }

    pub fn operand2(&self) -> i32 {
        self.operand2
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn result(&self) -> i32 {
        self.result
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.operand1, self.operator, self.operand2, self.result
        )
    }
}

/// Ordered, non-empty list of problems for one round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemSet {
    problems: Vec<Problem>,
}

impl ProblemSet {
    pub(crate) fn new_unchecked(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    pub fn new(problems: Vec<Problem>) -> Result<Self> {
        if problems.is_empty() {
            Err(GameError::EmptyProblemSet)
        } else {
            Ok(Self::new_unchecked(problems))
        }
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Problem> {
        self.problems.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn apply_follows_integer_arithmetic() {
        assert_eq!(Operator::Add.apply(6, 3), Some(9));
        assert_eq!(Operator::Sub.apply(3, 6), Some(-3));
        assert_eq!(Operator::Mul.apply(4, 12), Some(48));
        assert_eq!(Operator::Div.apply(12, 4), Some(3));
    }

    #[test]
    fn apply_rejects_inexact_and_undefined_division() {
        assert_eq!(Operator::Div.apply(7, 2), None);
        assert_eq!(Operator::Div.apply(6, 0), None);
        assert_eq!(Operator::Div.apply(i32::MIN, -1), None);
        assert_eq!(Operator::Mul.apply(i32::MAX, 2), None);
    }

    #[test]
    fn operator_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
        }
        assert_eq!("/".parse::<Operator>(), Err(GameError::InvalidFace));
        assert_eq!("x".parse::<Operator>(), Err(GameError::InvalidFace));
    }

    #[test]
    fn problem_requires_distinct_operands() {
        assert_eq!(
            Problem::new(4, Operator::Add, 4),
            Err(GameError::InvalidProblem)
        );
    }

    #[test]
    fn problem_requires_exact_division() {
        assert_eq!(
            Problem::new(7, Operator::Div, 2),
            Err(GameError::InvalidProblem)
        );

        let problem = Problem::new(12, Operator::Div, 3).unwrap();
        assert_eq!(problem.result(), 4);
        assert_eq!(problem.to_string(), "12 ÷ 3 = 4");
    }

    #[test]
    fn problem_set_cannot_be_empty() {
        assert_eq!(ProblemSet::new(vec![]), Err(GameError::EmptyProblemSet));

        let set = ProblemSet::new(vec![Problem::new(1, Operator::Add, 2).unwrap()]).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).map(Problem::result), Some(3));
        assert!(set.get(1).is_none());
    }
}
