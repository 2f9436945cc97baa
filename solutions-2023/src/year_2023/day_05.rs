//! Day 5: the almanac, mapping seed numbers to locations through a chain
//! of piecewise-offset tables.
//!
//! The remapping itself lives in [`crate::utils::range_map`]; this module
//! parses the almanac text and reduces the mapped results.

use crate::utils::range_map::{MapRule, Pipeline, RuleSet, Span};
use anyhow::anyhow;
use itertools::Itertools;
use solver_core::{InputParser, ParseError, PartSolver, SolveError};
use solver_macros::{AutoRegisterPuzzle, Puzzle};

#[derive(Puzzle, AutoRegisterPuzzle)]
#[puzzle(max_parts = 2)]
#[advent(year = 2023, day = 5, tags = ["2023", "ranges"])]
pub struct Solver;

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<u64>,
    pipeline: Pipeline,
}

impl InputParser for Solver {
    type Input<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        let mut seeds = Vec::new();
        let mut stages = Vec::new();
        let mut current: Vec<MapRule> = Vec::new();

        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(rest) = line.strip_prefix("seeds:") {
                seeds = parse_numbers(rest)?;
            } else if line.contains(':') {
                // A map label starts the next stage; close the previous one.
                if !current.is_empty() {
                    stages.push(RuleSet::new(std::mem::take(&mut current)));
                }
            } else {
                let fields = parse_numbers(line)?;
                let [destination_start, source_start, length] = fields[..] else {
                    return Err(ParseError::InvalidFormat(format!(
                        "expected 3 fields in rule line {line:?}, got {}",
                        fields.len()
                    )));
                };
                current.push(MapRule {
                    destination_start,
                    source_start,
                    length,
                });
            }
        }
        if !current.is_empty() {
            stages.push(RuleSet::new(current));
        }
        if seeds.is_empty() {
            return Err(ParseError::MissingData("seeds header".into()));
        }

        Ok(Almanac {
            seeds,
            pipeline: Pipeline::new(stages),
        })
    }
}

fn parse_numbers(text: &str) -> Result<Vec<u64>, ParseError> {
    text.split_whitespace()
        .map(|tok| {
            tok.parse()
                .map_err(|_| ParseError::InvalidFormat(format!("bad number {tok:?}")))
        })
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        input
            .seeds
            .iter()
            .map(|&seed| input.pipeline.run_value(seed))
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no seeds to map").into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        // Seeds are (start, length) pairs describing whole spans.
        let seed_spans: Vec<Span> = input
            .seeds
            .iter()
            .tuples()
            .map(|(&start, &length)| Span::new(start, start + length))
            .collect();

        input
            .pipeline
            .run(seed_spans)
            .iter()
            .map(|span| span.begin)
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no seed spans to map").into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solver_core::Puzzle;

    const SAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4";

    #[test]
    fn part1_sample() {
        let mut parsed = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut parsed, 1).unwrap(), "35");
    }

    #[test]
    fn part2_sample() {
        let mut parsed = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut parsed, 2).unwrap(), "46");
    }

    #[test]
    fn sample_maps_seed_79_to_location_82() {
        let parsed = Solver::parse(SAMPLE).unwrap();
        assert_eq!(parsed.pipeline.run_value(79), 82);
    }

    #[test]
    fn parse_collects_all_stages() {
        let parsed = Solver::parse(SAMPLE).unwrap();
        assert_eq!(parsed.seeds, vec![79, 14, 55, 13]);
        assert_eq!(parsed.pipeline.stages().len(), 7);
    }

    #[test]
    fn rule_line_with_wrong_field_count_is_fatal() {
        let input = "seeds: 1 2\n\nseed-to-soil map:\n50 98";
        assert!(matches!(
            Solver::parse(input),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn missing_seeds_header_is_fatal() {
        let input = "seed-to-soil map:\n50 98 2";
        assert!(matches!(Solver::parse(input), Err(ParseError::MissingData(_))));
    }
}
