//! Re-orders streamed results for display
//!
//! Parallel execution delivers results in completion order; display wants
//! (year, day, part) order. Two min-heaps do the buffering: one of expected
//! keys still owed to the output, one of received results waiting for their
//! turn.

use crate::executor::RunResult;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Ordering key for results, ascending by year, then day, then part
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&RunResult> for ResultKey {
    fn from(r: &RunResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Wrapper giving `RunResult` the reversed key ordering a min-heap needs
struct OrderedResult(RunResult);

impl Ord for OrderedResult {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for OrderedResult {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedResult {}

impl PartialEq for OrderedResult {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

/// Buffers results and releases them in sorted order
pub struct ResultAggregator {
    /// Expected keys not yet released; the next key to output is at the top
    expected: BinaryHeap<Reverse<ResultKey>>,
    /// Received results waiting for their turn
    pending: BinaryHeap<OrderedResult>,
}

impl ResultAggregator {
    /// Create an aggregator that will release exactly `expected_keys`
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result; returns every result now ready for output, in order
    pub fn add(&mut self, result: RunResult) -> Vec<RunResult> {
        self.pending.push(OrderedResult(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(top_pending)) =
            (self.expected.peek(), self.pending.peek())
        {
            if ResultKey::from(&top_pending.0) == *next_expected {
                self.expected.pop();
                // The peek above guarantees the pop
                if let Some(result) = self.pending.pop() {
                    ready.push(result.0);
                }
            } else {
                break;
            }
        }
        ready
    }

    /// Drain whatever is still buffered, in order (final flush)
    pub fn drain(&mut self) -> Vec<RunResult> {
        let mut results: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    /// Check if every expected result has been released
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}
