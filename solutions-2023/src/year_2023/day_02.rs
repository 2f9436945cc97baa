//! Day 2: cube games against a bag of known size.

use anyhow::{Context, anyhow};
use solver_core::{InputParser, ParseError, PartSolver, SolveError};
use solver_macros::{AutoRegisterPuzzle, Puzzle};

#[derive(Puzzle, AutoRegisterPuzzle)]
#[puzzle(max_parts = 2)]
#[advent(year = 2023, day = 2, tags = ["2023", "parsing"])]
pub struct Solver;

#[derive(Debug)]
pub struct Game {
    id: u32,
    draws: Vec<Draw>,
}

/// One handful of cubes shown during a game.
#[derive(Debug, Default, Clone, Copy)]
pub struct Draw {
    red: u32,
    green: u32,
    blue: u32,
}

impl InputParser for Solver {
    type Input<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(line_idx, line)| {
                parse_game(line).with_context(|| format!("line {}", line_idx + 1))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_game(line: &str) -> Result<Game, anyhow::Error> {
    let (header, body) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' in {line:?}"))?;
    let id = header
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("missing 'Game' header"))?
        .trim()
        .parse()?;
    let draws = body.split(';').map(parse_draw).collect::<Result<_, _>>()?;
    Ok(Game { id, draws })
}

fn parse_draw(text: &str) -> Result<Draw, anyhow::Error> {
    let mut draw = Draw::default();
    for part in text.split(',') {
        let (count, color) = part
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("malformed cube count {part:?}"))?;
        let count: u32 = count.parse()?;
        match color.trim() {
            "red" => draw.red += count,
            "green" => draw.green += count,
            "blue" => draw.blue += count,
            other => return Err(anyhow!("unknown color {other:?}")),
        }
    }
    Ok(draw)
}

impl Game {
    fn possible_with(&self, red: u32, green: u32, blue: u32) -> bool {
        self.draws
            .iter()
            .all(|d| d.red <= red && d.green <= green && d.blue <= blue)
    }

    /// Smallest bag that makes every draw of this game possible.
    fn minimum_bag(&self) -> Draw {
        self.draws.iter().fold(Draw::default(), |acc, d| Draw {
            red: acc.red.max(d.red),
            green: acc.green.max(d.green),
            blue: acc.blue.max(d.blue),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let total: u32 = input
            .iter()
            .filter(|game| game.possible_with(12, 13, 14))
            .map(|game| game.id)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let total: u32 = input
            .iter()
            .map(|game| {
                let bag = game.minimum_bag();
                bag.red * bag.green * bag.blue
            })
            .sum();
        Ok(total.to_string())
    }
}
