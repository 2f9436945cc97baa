//! Tests for the `Puzzle` dispatch derive

// The derive is re-exported by solver-core under the trait's own name, so
// one import covers both namespaces.
use solver_core::{InputParser, ParseError, PartSolver, Puzzle, SolveError};

#[derive(Puzzle)]
#[puzzle(max_parts = 2)]
struct TestPuzzle;

impl InputParser for TestPuzzle {
    type Input<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestPuzzle {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestPuzzle {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().product::<i32>().to_string())
    }
}

#[test]
fn test_parts_const_matches_attribute() {
    assert_eq!(<TestPuzzle as Puzzle>::PARTS, 2);
}

#[test]
fn test_dispatch_routes_to_part_solvers() {
    let mut parsed = TestPuzzle::parse("1\n2\n3\n4").unwrap();

    let part1 = <TestPuzzle as Puzzle>::solve_part(&mut parsed, 1).unwrap();
    assert_eq!(part1, "10");

    let part2 = <TestPuzzle as Puzzle>::solve_part(&mut parsed, 2).unwrap();
    assert_eq!(part2, "24");
}

#[test]
fn test_dispatch_matches_direct_part_solver_calls() {
    let mut shared_a = TestPuzzle::parse("2\n5\n7").unwrap();
    let mut shared_b = TestPuzzle::parse("2\n5\n7").unwrap();

    assert_eq!(
        <TestPuzzle as Puzzle>::solve_part(&mut shared_a, 1).unwrap(),
        <TestPuzzle as PartSolver<1>>::solve(&mut shared_b).unwrap()
    );
    assert_eq!(
        <TestPuzzle as Puzzle>::solve_part(&mut shared_a, 2).unwrap(),
        <TestPuzzle as PartSolver<2>>::solve(&mut shared_b).unwrap()
    );
}

#[test]
fn test_unimplemented_parts_are_rejected() {
    let mut parsed = TestPuzzle::parse("1").unwrap();

    for part in [0u8, 3, 255] {
        let result = <TestPuzzle as Puzzle>::solve_part(&mut parsed, part);
        assert!(
            matches!(result, Err(SolveError::PartNotImplemented(p)) if p == part),
            "part {} should be rejected",
            part
        );
    }
}

#[test]
fn test_single_part_puzzle() {
    #[derive(Puzzle)]
    #[puzzle(max_parts = 1)]
    struct OnePart;

    impl InputParser for OnePart {
        type Input<'a> = &'a str;

        fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
            Ok(input)
        }
    }

    impl PartSolver<1> for OnePart {
        fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
            Ok(input.len().to_string())
        }
    }

    assert_eq!(<OnePart as Puzzle>::PARTS, 1);
    let mut parsed = OnePart::parse("hello").unwrap();
    assert_eq!(<OnePart as Puzzle>::solve_part(&mut parsed, 1).unwrap(), "5");
    assert!(matches!(
        <OnePart as Puzzle>::solve_part(&mut parsed, 2),
        Err(SolveError::PartNotImplemented(2))
    ));
}
