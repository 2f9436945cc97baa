//! Day 1: calibration values hidden in amended trebuchet notes.

use anyhow::anyhow;
use solver_core::{InputParser, ParseError, PartSolver, SolveError};
use solver_macros::{AutoRegisterPuzzle, Puzzle};

#[derive(Puzzle, AutoRegisterPuzzle)]
#[puzzle(max_parts = 2)]
#[advent(year = 2023, day = 1, tags = ["2023", "scan"])]
pub struct Solver;

impl InputParser for Solver {
    type Input<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        Ok(input.lines().filter(|line| !line.is_empty()).collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        calibration_total(input, digits)
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        calibration_total(input, digits_and_words)
    }
}

fn calibration_total(
    lines: &[&str],
    digits_of: impl Fn(&str) -> Vec<u32>,
) -> Result<String, SolveError> {
    lines
        .iter()
        .map(|line| {
            let found = digits_of(line);
            match (found.first(), found.last()) {
                (Some(first), Some(last)) => Ok(10 * first + last),
                _ => Err(SolveError::SolveFailed(
                    anyhow!("no digit in line {line:?}").into(),
                )),
            }
        })
        .sum::<Result<u32, _>>()
        .map(|total| total.to_string())
}

fn digits(line: &str) -> Vec<u32> {
    line.chars().filter_map(|c| c.to_digit(10)).collect()
}

const DIGIT_WORDS: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// Digits and spelled-out digits, scanned at every position so overlapping
/// words ("oneight") all count.
fn digits_and_words(line: &str) -> Vec<u32> {
    let bytes = line.as_bytes();
    let mut found = Vec::new();
    for at in 0..bytes.len() {
        if bytes[at].is_ascii_digit() {
            found.push(u32::from(bytes[at] - b'0'));
            continue;
        }
        for (word, value) in DIGIT_WORDS {
            if bytes[at..].starts_with(word.as_bytes()) {
                found.push(value);
                break;
            }
        }
    }
    found
}
