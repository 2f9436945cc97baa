//! Parallel executor for running puzzles

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use solver_core::{ParseError, PuzzleError, PuzzleRegistry};
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from running a single puzzle part
pub struct RunResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, PuzzleError>,
    /// Parse time, reported once per parsed instance
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing one puzzle to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running puzzles
pub struct Executor {
    registry: PuzzleRegistry,
    store: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: PuzzleRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            registry,
            store: InputStore::new(config.input_dir.clone()),
            parallelize_by: config.parallelize_by,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
            thread_pool,
        })
    }

    /// Collect work items by filtering registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the puzzle's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items, streaming results to the channel
    pub fn execute(&self, tx: Sender<RunResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = self.run_work_item(&work, &tx) {
                        collected = Some(ArcExecutorError::combine_opt(collected, e));
                    }
                }
                collected.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                // Group by year; years run in parallel, days within a year
                // in order
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();
                self.execute_groups(by_year, &tx)
            }
            // Day and Part both fan out across work items; Part additionally
            // fans out over parts inside run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let singletons = work_items.into_iter().map(|w| vec![w]).collect();
                self.execute_groups(singletons, &tx)
            }
        }
    }

    /// Run groups on the thread pool, collecting rather than short-circuiting
    /// errors so every group still gets its chance to report results
    fn execute_groups(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<RunResult>,
    ) -> Result<(), ArcExecutorError> {
        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = self.run_work_item(&work, tx) {
                            err = Some(ArcExecutorError::combine_opt(err, e));
                        }
                    }
                    err
                })
                .reduce_with(|a, b| match (a, b) {
                    (Some(a), Some(b)) => Some(ArcExecutorError::combine(a, b)),
                    (a, b) => a.or(b),
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }

    /// Run a single work item: load its input, then solve the requested parts
    fn run_work_item(
        &self,
        work: &WorkItem,
        tx: &Sender<RunResult>,
    ) -> Result<(), ArcExecutorError> {
        let (year, day) = (work.year, work.day);
        let input = match self.store.load(year, day) {
            Ok(input) => input,
            Err(e) => return self.send_failure(work, &e.to_string(), tx),
        };

        if self.parallelize_by == ParallelizeBy::Part {
            // Each part parses its own instance so parts don't contend for
            // the shared data
            work.parts
                .clone()
                .into_par_iter()
                .map(|part| {
                    tx.send(solve_one(&self.registry, year, day, part, &input))
                        .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
                })
                .reduce_with(|a, b| a.and(b))
                .unwrap_or(Ok(()))
        } else {
            let mut puzzle = match self.registry.create(year, day, &input) {
                Ok(puzzle) => puzzle,
                Err(e) => return self.send_failure(work, &e.to_string(), tx),
            };
            let mut parse_reported = false;
            for part in work.parts.clone() {
                let (answer, solve_duration) = match puzzle.solve(part) {
                    Ok(result) => {
                        let solve_duration = result.duration();
                        (Ok(result.answer), solve_duration)
                    }
                    Err(e) => (Err(PuzzleError::from(e)), TimeDelta::zero()),
                };
                let parse_duration = (!parse_reported).then(|| puzzle.parse_duration());
                parse_reported = true;
                tx.send(RunResult {
                    year,
                    day,
                    part,
                    answer,
                    parse_duration,
                    solve_duration,
                })
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            Ok(())
        }
    }

    /// Report the same failure for every requested part so the aggregator
    /// still sees a complete result set
    fn send_failure(
        &self,
        work: &WorkItem,
        message: &str,
        tx: &Sender<RunResult>,
    ) -> Result<(), ArcExecutorError> {
        for part in work.parts.clone() {
            tx.send(error_result(work.year, work.day, part, message))
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
        }
        Ok(())
    }
}

/// Parse and solve one part in isolation (part-level parallelism gives each
/// part its own instance)
fn solve_one(registry: &PuzzleRegistry, year: u16, day: u8, part: u8, input: &str) -> RunResult {
    let mut puzzle = match registry.create(year, day, input) {
        Ok(puzzle) => puzzle,
        Err(e) => return error_result(year, day, part, &e.to_string()),
    };
    let (answer, solve_duration) = match puzzle.solve(part) {
        Ok(result) => {
            let solve_duration = result.duration();
            (Ok(result.answer), solve_duration)
        }
        Err(e) => (Err(PuzzleError::from(e)), TimeDelta::zero()),
    };
    RunResult {
        year,
        day,
        part,
        answer,
        parse_duration: Some(puzzle.parse_duration()),
        solve_duration,
    }
}

/// An error result standing in for a part that never ran
fn error_result(year: u16, day: u8, part: u8, message: &str) -> RunResult {
    RunResult {
        year,
        day,
        part,
        answer: Err(PuzzleError::ParseError(ParseError::Other(
            message.to_string(),
        ))),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}
