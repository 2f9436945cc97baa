//! Behavior tests for the puzzle registry

use solver_core::{
    InputParser, ParseError, Puzzle, PuzzleError, PuzzleInstance, RegistrationError,
    RegistryBuilder, SolveError,
};

struct SumPuzzle;

impl InputParser for SumPuzzle {
    type Input<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        input
            .lines()
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad int {l:?}")))
            })
            .collect()
    }
}

impl Puzzle for SumPuzzle {
    const PARTS: u8 = 2;

    fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(input.iter().sum::<i64>().to_string()),
            2 => Ok(input.iter().product::<i64>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn register_sum(builder: RegistryBuilder, year: u16, day: u8) -> RegistryBuilder {
    builder
        .register(year, day, SumPuzzle::PARTS, move |input: &str| {
            Ok(Box::new(PuzzleInstance::<SumPuzzle>::from_input(
                year, day, input,
            )?))
        })
        .unwrap()
}

#[test]
fn create_parses_and_solves() {
    let registry = register_sum(RegistryBuilder::new(), 2023, 1).build();

    let mut puzzle = registry.create(2023, 1, "2\n3\n4").unwrap();
    assert_eq!(puzzle.year(), 2023);
    assert_eq!(puzzle.day(), 1);
    assert_eq!(puzzle.parts(), 2);
    assert_eq!(puzzle.solve(1).unwrap().answer, "9");
    assert_eq!(puzzle.solve(2).unwrap().answer, "24");
}

#[test]
fn duplicate_registration_is_rejected() {
    let builder = register_sum(RegistryBuilder::new(), 2023, 1);
    let result = builder.register(2023, 1, 2, |input: &str| {
        Ok(Box::new(PuzzleInstance::<SumPuzzle>::from_input(
            2023, 1, input,
        )?))
    });
    assert!(matches!(
        result,
        Err(RegistrationError::DuplicatePuzzle(2023, 1))
    ));
}

#[test]
fn unregistered_puzzle_is_not_found() {
    let registry = RegistryBuilder::new().build();
    assert!(matches!(
        registry.create(2023, 1, ""),
        Err(PuzzleError::NotFound(2023, 1))
    ));
}

#[test]
fn parse_failure_surfaces_at_create() {
    let registry = register_sum(RegistryBuilder::new(), 2023, 1).build();
    assert!(matches!(
        registry.create(2023, 1, "not a number"),
        Err(PuzzleError::ParseError(ParseError::InvalidFormat(_)))
    ));
}

#[test]
fn info_reports_parts_and_order() {
    let builder = register_sum(RegistryBuilder::new(), 2023, 5);
    let builder = register_sum(builder, 2022, 9);
    let builder = register_sum(builder, 2023, 1);
    let registry = builder.build();

    assert_eq!(registry.len(), 3);
    assert!(registry.contains(2023, 5));
    assert_eq!(registry.info(2023, 5).unwrap().parts, 2);
    assert!(registry.info(2024, 1).is_none());

    // iter_info is sorted by (year, day)
    let order: Vec<(u16, u8)> = registry.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(order, vec![(2022, 9), (2023, 1), (2023, 5)]);
}

#[test]
fn out_of_range_part_is_checked_at_the_instance() {
    let registry = register_sum(RegistryBuilder::new(), 2023, 1).build();
    let mut puzzle = registry.create(2023, 1, "1").unwrap();
    assert!(matches!(
        puzzle.solve(3),
        Err(SolveError::PartOutOfRange(3))
    ));
}
