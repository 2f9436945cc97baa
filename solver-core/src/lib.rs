//! Daily puzzle solver framework
//!
//! A trait-based framework for implementing daily puzzle solvers across
//! multiple years and days. Each puzzle parses its input once into a typed
//! structure and can solve multiple parts against it.
//!
//! # Overview
//!
//! This library provides:
//! - [`InputParser`] / [`PartSolver`] / [`Puzzle`] traits separating parsing
//!   from per-part solving
//! - [`PuzzleInstance`] / [`DynPuzzle`] type erasure with parse and solve
//!   timing
//! - An inventory-backed [`PuzzleRegistry`] so solution crates register
//!   themselves at link time
//!
//! # Quick Example
//!
//! ```
//! use solver_core::{InputParser, ParseError, Puzzle, RegistryBuilder, SolveError};
//!
//! pub struct Day1;
//!
//! impl InputParser for Day1 {
//!     type Input<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
//!             .collect()
//!     }
//! }
//!
//! impl Puzzle for Day1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(input.iter().sum::<i32>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register(2023, 1, Day1::PARTS, |input: &str| {
//!         Ok(Box::new(solver_core::PuzzleInstance::<Day1>::from_input(2023, 1, input)?))
//!     })
//!     .unwrap()
//!     .build();
//!
//! let mut puzzle = registry.create(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(puzzle.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Part dispatch and registration macros
//!
//! Solution crates normally implement [`PartSolver<N>`] per part and derive
//! the rest:
//!
//! ```ignore
//! #[derive(Puzzle, AutoRegisterPuzzle)]
//! #[puzzle(max_parts = 2)]
//! #[advent(year = 2023, day = 5, tags = ["ranges"])]
//! pub struct Solver;
//! ```

mod error;
mod instance;
mod puzzle;
mod registry;

// Re-export public API
pub use error::{ParseError, PuzzleError, RegistrationError, SolveError};
pub use instance::{DynPuzzle, PuzzleInstance, SolveResult};
pub use puzzle::{InputParser, PartSolver, Puzzle, PuzzleExt};
pub use registry::{
    PuzzleFactory, PuzzleInfo, PuzzlePlugin, PuzzleRegistry, RegisterablePuzzle, RegistryBuilder,
};

// Re-export inventory for use by the derive macros
pub use inventory;

// Re-export the derive macros
pub use solver_macros::{AutoRegisterPuzzle, Puzzle};
