//! Property-based tests for part-bounds validation

use proptest::prelude::*;
use solver_core::{InputParser, ParseError, Puzzle, PuzzleExt, SolveError};

/// Test puzzle with configurable PARTS
struct TestPuzzle<const N: u8>;

impl<const N: u8> InputParser for TestPuzzle<N> {
    type Input<'a> = ();

    fn parse(_input: &str) -> Result<Self::Input<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Puzzle for TestPuzzle<N> {
    const PARTS: u8 = N;

    fn solve_part(_input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// For any part outside 1..=PARTS, the checked entry point returns
    /// `PartOutOfRange(part)` without calling the puzzle.
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = match max_parts {
            1 => TestPuzzle::<1>::solve_part_checked(&mut (), part),
            2 => TestPuzzle::<2>::solve_part_checked(&mut (), part),
            _ => TestPuzzle::<3>::solve_part_checked(&mut (), part),
        };
        let effective_max = max_parts.clamp(1, 3);

        if part == 0 || part > effective_max {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert!(result.is_ok(), "Expected Ok for part {} of {}", part, effective_max);
        }
    }

    /// For any part within 1..=PARTS, the checked entry point delegates to
    /// `solve_part` unchanged.
    #[test]
    fn prop_valid_range_delegation(part in 1u8..=2) {
        let checked = TestPuzzle::<2>::solve_part_checked(&mut (), part);
        let direct = TestPuzzle::<2>::solve_part(&mut (), part);

        prop_assert!(checked.is_ok());
        prop_assert!(direct.is_ok());
        prop_assert_eq!(checked.unwrap(), direct.unwrap());
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_part_zero_rejected() {
        let result = TestPuzzle::<2>::solve_part_checked(&mut (), 0);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn test_part_exceeds_max_rejected() {
        let result = TestPuzzle::<2>::solve_part_checked(&mut (), 3);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_valid_part_succeeds() {
        let result = TestPuzzle::<2>::solve_part_checked(&mut (), 1);
        assert_eq!(result.unwrap(), "part1");
    }
}
