//! Type-erased puzzle instances with parse/solve timing

use crate::error::{ParseError, SolveError};
use crate::puzzle::{Puzzle, PuzzleExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving one puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A puzzle instance holding the parsed input for a specific year/day.
///
/// Parsing happens once at construction and its timing is recorded; each
/// subsequent [`DynPuzzle::solve`] call works against the same parsed data.
pub struct PuzzleInstance<'a, P: Puzzle> {
    year: u16,
    day: u8,
    input: P::Input<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, P: Puzzle> PuzzleInstance<'a, P> {
    /// Parse `input` and create an instance, recording parse timing.
    pub fn from_input(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let input = P::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            input,
            parse_start,
            parse_end,
        })
    }
}

/// Uniform interface over puzzle instances of different concrete types.
///
/// The registry hands out `Box<dyn DynPuzzle>` so callers can run any
/// registered puzzle without knowing its input type.
///
/// # Example
///
/// ```no_run
/// use solver_core::DynPuzzle;
///
/// fn example(mut puzzle: Box<dyn DynPuzzle>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=puzzle.parts() {
///         let result = puzzle.solve(part)?;
///         println!("Part {}: {} (took {:?})", part, result.answer, result.duration());
///     }
///     println!("Parse took {:?}", puzzle.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynPuzzle {
    /// Solve the specified part with timing
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The part was solved successfully with timing info
    /// * `Err(SolveError)` - The part is out of range or solving failed
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Get the year for this puzzle
    fn year(&self) -> u16;

    /// Get the day for this puzzle
    fn day(&self) -> u8;

    /// Get the number of parts this puzzle supports
    fn parts(&self) -> u8;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, P: Puzzle> DynPuzzle for PuzzleInstance<'a, P> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = P::solve_part_checked(&mut self.input, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        P::PARTS
    }
}
