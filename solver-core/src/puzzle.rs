//! Core puzzle traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into the solver's working data.
///
/// Splitting parsing out of the solving traits keeps the two concerns
/// separate: a puzzle parses its input exactly once, and every part works
/// against the same parsed structure.
///
/// # Example
///
/// ```
/// use solver_core::{InputParser, ParseError};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Input<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait InputParser {
    /// The working data produced from the raw input.
    ///
    /// Any ownership strategy works:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type Input<'a>;

    /// Parse the raw input string into the working data.
    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError>;
}

/// Trait for solving one part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, ...), so implementing a
/// part is a separate impl block and a missing part is a compile error at
/// the dispatch site rather than a runtime surprise.
///
/// # Example
///
/// ```
/// use solver_core::{InputParser, ParseError, PartSolver, SolveError};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Input<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
///         Ok(input.iter().sum::<i32>().to_string())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: InputParser {
    /// Solve this part of the puzzle.
    ///
    /// Takes the input mutably so parts can cache intermediate results in
    /// the shared structure when part 2 builds on part 1's work.
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError>;
}

/// Core trait implemented by every registered puzzle.
///
/// Extends [`InputParser`] and adds runtime part dispatch. Usually generated
/// by `#[derive(Puzzle)]`, which routes each part number to the matching
/// [`PartSolver`] impl.
///
/// # Example
///
/// ```
/// use solver_core::{InputParser, ParseError, Puzzle, SolveError};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Input<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl Puzzle for Day1 {
///     const PARTS: u8 = 2;
///
///     fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(input.iter().sum::<i32>().to_string()),
///             2 => Ok(input.iter().product::<i32>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Puzzle: InputParser {
    /// Number of parts this puzzle implements
    const PARTS: u8;

    /// Solve a specific part of the puzzle
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError>;
}

/// Blanket extension adding a range-checked entry point.
pub trait PuzzleExt: Puzzle {
    fn solve_part_checked(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(input, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<P: Puzzle + ?Sized> PuzzleExt for P {}
