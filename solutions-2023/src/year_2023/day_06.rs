//! Day 6: toy boat races won by holding the button long enough.
//!
//! Holding for `h` milliseconds in a `t`-millisecond race travels
//! `h * (t - h)`, so the winning holds sit strictly between the roots of
//! `h^2 - t*h + record = 0`. The float roots are only a first guess; the
//! exact boundaries are settled with integer arithmetic.

use anyhow::anyhow;
use solver_core::{InputParser, ParseError, PartSolver, SolveError};
use solver_macros::{AutoRegisterPuzzle, Puzzle};

#[derive(Puzzle, AutoRegisterPuzzle)]
#[puzzle(max_parts = 2)]
#[advent(year = 2023, day = 6, tags = ["2023", "math"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Race {
    time: u64,
    record: u64,
}

#[derive(Debug)]
pub struct Contest {
    races: Vec<Race>,
    /// The same table read as one race with the column gaps ignored.
    merged: Race,
}

impl InputParser for Solver {
    type Input<'a> = Contest;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let mut times = None;
        let mut distances = None;
        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(rest) = line.strip_prefix("Time:") {
                if times.is_some() {
                    return Err(ParseError::InvalidFormat("duplicate Time row".into()));
                }
                times = Some(parse_row(rest)?);
            } else if let Some(rest) = line.strip_prefix("Distance:") {
                if distances.is_some() {
                    return Err(ParseError::InvalidFormat("duplicate Distance row".into()));
                }
                distances = Some(parse_row(rest)?);
            } else {
                return Err(ParseError::InvalidFormat(format!(
                    "unexpected line {line:?}"
                )));
            }
        }

        let (times, merged_time) = times.ok_or(ParseError::MissingData("Time row".into()))?;
        let (distances, merged_distance) =
            distances.ok_or(ParseError::MissingData("Distance row".into()))?;
        if times.len() != distances.len() || times.is_empty() {
            return Err(ParseError::InvalidFormat(
                "Time and Distance rows must list the same, nonzero number of values".into(),
            ));
        }

        let races = times
            .into_iter()
            .zip(distances)
            .map(|(time, record)| Race { time, record })
            .collect();
        Ok(Contest {
            races,
            merged: Race {
                time: merged_time,
                record: merged_distance,
            },
        })
    }
}

/// Parse one table row both ways: as separate values and with the digits
/// run together into a single value.
fn parse_row(text: &str) -> Result<(Vec<u64>, u64), ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let values = tokens
        .iter()
        .map(|tok| {
            tok.parse()
                .map_err(|_| ParseError::InvalidFormat(format!("bad number {tok:?}")))
        })
        .collect::<Result<Vec<u64>, _>>()?;
    let merged = tokens
        .concat()
        .parse()
        .map_err(|_| ParseError::InvalidFormat("merged row does not fit in u64".into()))?;
    Ok((values, merged))
}

/// Count the hold times that beat the record.
fn ways_to_win(race: Race) -> u64 {
    let Race { time, record } = race;
    let Some(disc) = time
        .checked_mul(time)
        .zip(record.checked_mul(4))
        .and_then(|(t2, r4)| t2.checked_sub(r4))
    else {
        return 0;
    };

    let root = (disc as f64).sqrt();
    let beats = |hold: u64| hold * (time - hold) > record;

    // Widen the float guess by one on each side, then tighten exactly.
    let mut low = ((((time as f64) - root) / 2.0).floor().max(0.0) as u64).saturating_sub(1);
    let mut high = (((((time as f64) + root) / 2.0).ceil()) as u64 + 1).min(time);
    while low <= high && !beats(low) {
        low += 1;
    }
    if low > high {
        return 0;
    }
    while !beats(high) {
        high -= 1;
    }
    high - low + 1
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        input
            .races
            .iter()
            .map(|&race| {
                let ways = ways_to_win(race);
                if ways == 0 {
                    Err(SolveError::SolveFailed(
                        anyhow!("race {race:?} cannot be won").into(),
                    ))
                } else {
                    Ok(ways)
                }
            })
            .product::<Result<u64, _>>()
            .map(|product| product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(ways_to_win(input.merged).to_string())
    }
}
