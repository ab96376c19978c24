use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use itertools::Itertools;
use rayon::prelude::*;
use regex::Regex;

use crate::error::{parse_int, Error};
use crate::operator::{OperatorKind, OperatorSet};

static EQUATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\S+?)\s*:(.*)$").unwrap());

/// One calibration line: a target and the operands that should reach it when
/// combined strictly left to right.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Equation {
    target: i64,
    operands: Vec<i64>,
}

impl Equation {
    pub fn new(target: i64, operands: Vec<i64>) -> Result<Self, Error> {
        let reject = |reason| Error::InvalidEquation {
            line: format!("{}: {}", target, operands.iter().join(" ")),
            reason,
        };
        if operands.len() < 2 {
            return Err(reject("expected at least two operands"));
        }
        if target < 0 || operands.iter().any(|&operand| operand < 0) {
            return Err(reject("values must be non-negative"));
        }
        Ok(Self { target, operands })
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn operands(&self) -> &[i64] {
        &self.operands
    }

    pub fn is_satisfiable(&self, operators: OperatorSet) -> bool {
        let (&first, rest) = self.split();
        search(self.target, Some(first), rest, operators.operators())
    }

    /// Returns the first operator assignment that reaches the target, one
    /// operator per gap between operands.
    pub fn solve(&self, operators: OperatorSet) -> Option<Vec<OperatorKind>> {
        let (&first, rest) = self.split();
        let mut path = Vec::with_capacity(rest.len());
        trace(self.target, Some(first), rest, operators.operators(), &mut path).then_some(path)
    }

    /// Formats an assignment as `292 = 11 + 6 * 16 + 20`.
    pub fn render(&self, assignment: &[OperatorKind]) -> String {
        let (first, rest) = self.split();
        let mut rendered = format!("{} = {}", self.target, first);
        for (op, operand) in assignment.iter().zip(rest) {
            rendered += &format!(" {} {}", op, operand);
        }
        rendered
    }

    fn split(&self) -> (&i64, &[i64]) {
        // at least two operands, checked in `new`
        (&self.operands[0], &self.operands[1..])
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.target, self.operands.iter().join(" "))
    }
}

impl FromStr for Equation {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let Some(captures) = EQUATION_LINE.captures(line) else {
            return Err(Error::InvalidEquation {
                line: line.to_owned(),
                reason: "expected `target: operand operand ...`",
            });
        };
        let target = parse_int(&captures[1])?;
        let operands = captures[2].split_whitespace().map(parse_int).collect::<Result<_, _>>()?;
        Self::new(target, operands)
    }
}

pub fn parse_equations(input: &str) -> Result<Vec<Equation>, Error> {
    input.lines().filter(|line| !line.trim().is_empty()).map(str::parse).collect()
}

pub fn is_satisfiable(equation: &Equation, operators: OperatorSet) -> bool {
    equation.is_satisfiable(operators)
}

/// Sums the targets of every equation some assignment from `operators`
/// satisfies.
pub fn total_calibration(equations: &[Equation], operators: OperatorSet) -> i64 {
    equations
        .par_iter()
        .filter(|equation| equation.is_satisfiable(operators))
        .map(Equation::target)
        .sum()
}

// `None` stands for a running value past `i64::MAX`. Only `* 0` brings such a
// value back, and every other step keeps it out of range.
fn advance(op: OperatorKind, running: Option<i64>, operand: i64) -> Option<i64> {
    match running {
        Some(running) => op.apply(running, operand),
        None => (op == OperatorKind::Multiply && operand == 0).then_some(0),
    }
}

// A branch above the target can only come back down through a later `* 0`.
fn keep(candidate: Option<i64>, target: i64, rest: &[i64]) -> bool {
    candidate.is_some_and(|candidate| candidate <= target) || rest.contains(&0)
}

fn search(target: i64, running: Option<i64>, rest: &[i64], operators: &[OperatorKind]) -> bool {
    let Some((&operand, rest)) = rest.split_first() else {
        return running == Some(target);
    };
    operators.iter().any(|&op| {
        let candidate = advance(op, running, operand);
        keep(candidate, target, rest) && search(target, candidate, rest, operators)
    })
}

fn trace(
    target: i64,
    running: Option<i64>,
    rest: &[i64],
    operators: &[OperatorKind],
    path: &mut Vec<OperatorKind>,
) -> bool {
    let Some((&operand, rest)) = rest.split_first() else {
        return running == Some(target);
    };
    for &op in operators {
        let candidate = advance(op, running, operand);
        if !keep(candidate, target, rest) {
            continue;
        }
        path.push(op);
        if trace(target, candidate, rest, operators, path) {
            return true;
        }
        path.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use itertools::repeat_n;

    use super::OperatorKind::*;
    use super::*;

    const EXAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    fn eq(line: &str) -> Equation {
        line.parse().unwrap()
    }

    fn evaluate(operands: &[i64], assignment: &[OperatorKind]) -> Option<i64> {
        assignment
            .iter()
            .zip(&operands[1..])
            .try_fold(operands[0], |running, (op, &operand)| op.apply(running, operand))
    }

    /// Every value some assignment reaches, without pruning.
    fn brute_force(operands: &[i64], operators: OperatorSet) -> Vec<i64> {
        repeat_n(operators.operators().iter().copied(), operands.len() - 1)
            .multi_cartesian_product()
            .filter_map(|assignment| evaluate(operands, &assignment))
            .collect()
    }

    #[test]
    fn example_totals() {
        let equations = parse_equations(EXAMPLE).unwrap();
        assert_eq!(equations.len(), 9);
        assert_eq!(total_calibration(&equations, OperatorSet::variant_one()), 3749);
        assert_eq!(total_calibration(&equations, OperatorSet::variant_two()), 11387);
    }

    #[test]
    fn end_to_end_scenarios() {
        let two = OperatorSet::variant_two();
        assert!(is_satisfiable(&eq("190: 10 19"), two));
        assert!(is_satisfiable(&eq("3267: 81 40 27"), two));
        assert!(is_satisfiable(&eq("292: 11 6 16 20"), two));
        assert!(is_satisfiable(&eq("156: 15 6"), two));
        assert!(!is_satisfiable(&eq("156: 15 6"), OperatorSet::variant_one()));
        assert!(!is_satisfiable(&eq("11: 3 4"), OperatorSet::variant_one()));
        assert!(!is_satisfiable(&eq("11: 3 4"), two));
    }

    #[test]
    fn order_matters_for_concatenation() {
        let two = OperatorSet::variant_two();
        assert!(eq("129: 12 9").is_satisfiable(two));
        assert!(!eq("129: 9 12").is_satisfiable(two));
        assert!(eq("11: 2 9").is_satisfiable(OperatorSet::variant_one()));
        assert!(eq("11: 9 2").is_satisfiable(OperatorSet::variant_one()));
    }

    #[test]
    fn two_operands_match_closed_form() {
        for a in 0..12 {
            for b in 0..12 {
                for target in [0, 1, 7, 11, 12, 20, 24, 110, 111] {
                    let equation = Equation::new(target, vec![a, b]).unwrap();
                    let one = a + b == target || a * b == target;
                    let two = one || Concatenate.apply(a, b) == Some(target);
                    assert_eq!(equation.is_satisfiable(OperatorSet::variant_one()), one, "{equation}");
                    assert_eq!(equation.is_satisfiable(OperatorSet::variant_two()), two, "{equation}");
                }
            }
        }
    }

    #[test]
    fn pruned_search_agrees_with_brute_force() {
        let cases = (2..=5)
            .flat_map(|n| repeat_n([0, 1, 2, 7, 10], n).multi_cartesian_product())
            .chain(repeat_n([1, 2, 3], 6).multi_cartesian_product());
        for operands in cases {
            for operators in [OperatorSet::variant_one(), OperatorSet::variant_two()] {
                let reachable = brute_force(&operands, operators);
                let misses = reachable.iter().map(|value| value + 1);
                for target in reachable.iter().copied().chain(misses).unique() {
                    let equation = Equation::new(target, operands.clone()).unwrap();
                    assert_eq!(
                        equation.is_satisfiable(operators),
                        reachable.contains(&target),
                        "{equation} with {operators:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn zero_after_overshoot_is_still_found() {
        let equation = eq("0: 2 3 0");
        assert!(equation.is_satisfiable(OperatorSet::variant_one()));
        assert_eq!(equation.solve(OperatorSet::variant_one()), Some(vec![Add, Multiply]));
    }

    #[test]
    fn solve_returns_first_assignment() {
        let two = OperatorSet::variant_two();
        let equation = eq("292: 11 6 16 20");
        let assignment = equation.solve(two).unwrap();
        assert_eq!(assignment, [Add, Multiply, Add]);
        assert_eq!(equation.render(&assignment), "292 = 11 + 6 * 16 + 20");
        assert_eq!(eq("7290: 6 8 6 15").solve(two), Some(vec![Multiply, Concatenate, Multiply]));
        assert_eq!(eq("192: 17 8 14").solve(two), Some(vec![Concatenate, Add]));
        assert_eq!(eq("83: 17 5").solve(two), None);
    }

    #[test]
    fn overflow_prunes_instead_of_wrapping() {
        let equation = Equation::new(i64::MAX, vec![i64::MAX, 0, 1]).unwrap();
        assert!(equation.is_satisfiable(OperatorSet::variant_one()));
        let equation = Equation::new(5, vec![i64::MAX, i64::MAX]).unwrap();
        assert!(!equation.is_satisfiable(OperatorSet::variant_two()));
    }

    #[test]
    fn zero_rescues_an_overflowed_branch() {
        let equation = Equation::new(0, vec![i64::MAX, 2, 0]).unwrap();
        assert!(equation.is_satisfiable(OperatorSet::variant_one()));
        assert_eq!(equation.solve(OperatorSet::variant_one()), Some(vec![Add, Multiply]));
        let equation = Equation::new(0, vec![i64::MAX, 2, 5, 0]).unwrap();
        assert_eq!(equation.solve(OperatorSet::variant_two()), Some(vec![Add, Add, Multiply]));
        let equation = Equation::new(3, vec![i64::MAX, 2, 0, 3]).unwrap();
        assert!(equation.is_satisfiable(OperatorSet::variant_one()));
        let equation = Equation::new(1, vec![i64::MAX, 2, 0]).unwrap();
        assert!(!equation.is_satisfiable(OperatorSet::variant_two()));
    }

    #[test]
    fn malformed_lines() {
        assert!(matches!("190: 10".parse::<Equation>(), Err(Error::InvalidEquation { .. })));
        assert!(matches!("190:".parse::<Equation>(), Err(Error::InvalidEquation { .. })));
        assert!(matches!("190 10 19".parse::<Equation>(), Err(Error::InvalidEquation { .. })));
        assert!(matches!("190: 10 x".parse::<Equation>(), Err(Error::ParseInt { .. })));
        assert!(matches!("abc: 10 19".parse::<Equation>(), Err(Error::ParseInt { .. })));
        assert!(matches!("190: -10 19".parse::<Equation>(), Err(Error::InvalidEquation { .. })));
        assert!(matches!(Equation::new(5, vec![]), Err(Error::InvalidEquation { .. })));
    }

    #[test]
    fn no_space_after_colon() {
        assert_eq!(eq("190:10 19"), eq("190: 10 19"));
        assert_eq!(eq("7290 :6 8 6 15").operands(), &[6, 8, 6, 15]);
    }

    #[test]
    fn display_round_trips_text() {
        assert_eq!(eq("  3267:   81 40  27 ").to_string(), "3267: 81 40 27");
    }
}
