//! Advent of Code 2023 puzzle solutions with automatic registration
//!
//! Each day lives in its own module under [`year_2023`] and registers
//! itself with the solver framework via `#[derive(AutoRegisterPuzzle)]`.
//! Shared algorithmic pieces that are bigger than one day live under
//! [`utils`].

pub mod utils;
pub mod year_2023;
