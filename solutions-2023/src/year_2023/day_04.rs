//! Day 4: scratchcards that win copies of later cards.

use anyhow::{Context, anyhow};
use solver_core::{InputParser, ParseError, PartSolver, SolveError};
use solver_macros::{AutoRegisterPuzzle, Puzzle};
use std::collections::HashSet;

#[derive(Puzzle, AutoRegisterPuzzle)]
#[puzzle(max_parts = 2)]
#[advent(year = 2023, day = 4, tags = ["2023", "sets"])]
pub struct Solver;

/// A card reduced to what both parts need: how many of its numbers won.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    matches: usize,
}

impl InputParser for Solver {
    type Input<'a> = Vec<Card>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(line_idx, line)| {
                parse_card(line).with_context(|| format!("card on line {}", line_idx + 1))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_card(line: &str) -> Result<Card, anyhow::Error> {
    let (_, body) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' in {line:?}"))?;
    let (winning, held) = body
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|' in {line:?}"))?;
    let winning = parse_numbers(winning)?;
    let held = parse_numbers(held)?;
    Ok(Card {
        matches: held.intersection(&winning).count(),
    })
}

fn parse_numbers(text: &str) -> Result<HashSet<u32>, anyhow::Error> {
    text.split_whitespace()
        .map(|tok| tok.parse().map_err(|_| anyhow!("bad number {tok:?}")))
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let total: u32 = input
            .iter()
            .filter(|card| card.matches > 0)
            .map(|card| 1 << (card.matches - 1))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        // Each card wins one copy of the next `matches` cards per copy held.
        let mut copies = vec![1u64; input.len()];
        for (idx, card) in input.iter().enumerate() {
            for won in idx + 1..=(idx + card.matches).min(input.len() - 1) {
                copies[won] += copies[idx];
            }
        }
        Ok(copies.iter().sum::<u64>().to_string())
    }
}
