//! Interval remapping through piecewise-offset rule tables
//!
//! An almanac-style mapping stage is a set of rules, each shifting one
//! contiguous source interval by a constant offset; values outside every
//! rule pass through unchanged. [`RuleSet::map_span`] pushes a whole
//! interval through one stage, splitting it wherever it partially overlaps
//! a rule, and [`Pipeline`] chains stages so the output spans of one stage
//! feed the next.
//!
//! All intervals are half-open: `[begin, end)` includes `begin` and
//! excludes `end`. An interval that merely touches a rule boundary does not
//! overlap it.
//!
//! # Example
//!
//! ```
//! use solutions_2023::utils::range_map::{MapRule, RuleSet, Span};
//!
//! // source [5, 8) shifts to destination [10, 13)
//! let stage = RuleSet::new(vec![MapRule {
//!     destination_start: 10,
//!     source_start: 5,
//!     length: 3,
//! }]);
//!
//! assert_eq!(
//!     stage.map_span(Span::new(3, 10)),
//!     vec![Span::new(3, 5), Span::new(8, 10), Span::new(10, 13)],
//! );
//! assert_eq!(stage.map_value(6), 11);
//! ```

#[cfg(test)]
mod tests;

/// A half-open interval `[begin, end)` of unsigned values.
///
/// `begin <= end` is expected; a zero-width span (`begin == end`) is
/// degenerate but safe to feed anywhere in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub begin: u64,
    pub end: u64,
}

impl Span {
    pub fn new(begin: u64, end: u64) -> Self {
        debug_assert!(begin <= end, "span [{begin}, {end}) is inverted");
        Self { begin, end }
    }

    /// Number of values covered
    pub fn width(&self) -> u64 {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

/// One remapping rule: the source interval
/// `[source_start, source_start + length)` shifted to begin at
/// `destination_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRule {
    pub destination_start: u64,
    pub source_start: u64,
    pub length: u64,
}

impl MapRule {
    fn source_end(&self) -> u64 {
        self.source_start + self.length
    }

    /// Shift a source value into destination space.
    ///
    /// Valid for any `value` with `source_start <= value <= source_end`;
    /// the end bound maps the exclusive end of a span.
    fn translate(&self, value: u64) -> u64 {
        self.destination_start + (value - self.source_start)
    }
}

/// One mapping stage: a set of rules with pairwise-disjoint source
/// intervals.
///
/// Disjointness is the caller's responsibility and is not checked; if rules
/// overlap, the first rule in `source_start` order wins, deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<MapRule>,
}

impl RuleSet {
    /// Build a stage from its rules.
    ///
    /// Rules are sorted by `source_start` once here; [`Self::map_span`]
    /// relies on that order for its fully-left early exit.
    pub fn new(mut rules: Vec<MapRule>) -> Self {
        rules.sort_unstable_by_key(|rule| rule.source_start);
        Self { rules }
    }

    /// The rules of this stage, in `source_start` order.
    pub fn rules(&self) -> &[MapRule] {
        &self.rules
    }

    /// Map one span through this stage, splitting it wherever it partially
    /// overlaps a rule.
    ///
    /// The returned spans cover exactly the image of `span`: every value is
    /// shifted by the one rule containing it, or passed through unchanged,
    /// and lands in exactly one output span. The output is sorted by
    /// `begin` so repeated runs compare equal; it is not coalesced.
    pub fn map_span(&self, span: Span) -> Vec<Span> {
        let mut pending = vec![span];
        let mut mapped = Vec::new();

        while let Some(current) = pending.pop() {
            let mut matched = false;
            for rule in &self.rules {
                let (start, end) = (rule.source_start, rule.source_end());
                if current.end <= start {
                    // Left of this rule, and rules are sorted: identity.
                    mapped.push(current);
                } else if current.begin < start && current.end <= end {
                    // Straddles the rule's left edge. The equality in
                    // `current.end <= end` matters: an exclusive end landing
                    // exactly on the rule's end is still an overlap.
                    pending.push(Span::new(current.begin, start));
                    pending.push(Span::new(start, current.end));
                } else if current.begin >= start && current.begin < end && current.end <= end {
                    // Fully inside the rule.
                    mapped.push(Span::new(
                        rule.translate(current.begin),
                        rule.translate(current.end),
                    ));
                } else if current.begin >= start && current.begin < end && current.end > end {
                    // Straddles the rule's right edge.
                    pending.push(Span::new(current.begin, end));
                    pending.push(Span::new(end, current.end));
                } else if current.begin < start && current.end > end {
                    // Swallows the rule whole, three-way split.
                    pending.push(Span::new(current.begin, start));
                    pending.push(Span::new(start, end));
                    pending.push(Span::new(end, current.end));
                } else {
                    // No overlap with this rule, try the next one.
                    continue;
                }
                matched = true;
                break;
            }
            if !matched {
                // Right of every rule: identity.
                mapped.push(current);
            }
        }

        mapped.sort_unstable_by_key(|span| span.begin);
        mapped
    }

    /// Look up a single value through this stage.
    ///
    /// Implemented on the unit span `[value, value + 1)` so the scalar and
    /// interval paths cannot disagree.
    pub fn map_value(&self, value: u64) -> u64 {
        let image = self.map_span(Span::new(value, value + 1));
        // A unit-width span never splits.
        image.first().map_or(value, |span| span.begin)
    }
}

/// An ordered chain of mapping stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<RuleSet>,
}

impl Pipeline {
    pub fn new(stages: Vec<RuleSet>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[RuleSet] {
        &self.stages
    }

    /// Push a set of spans through every stage in order.
    ///
    /// Each stage replaces the working set with the union of its per-span
    /// images. Adjacent or duplicate spans are not coalesced across inputs;
    /// consumers only ever reduce over the result (typically taking the
    /// minimum `begin`).
    pub fn run(&self, spans: Vec<Span>) -> Vec<Span> {
        self.stages.iter().fold(spans, |spans, stage| {
            spans
                .into_iter()
                .flat_map(|span| stage.map_span(span))
                .collect()
        })
    }

    /// Push a single value through every stage in order.
    pub fn run_value(&self, value: u64) -> u64 {
        self.stages
            .iter()
            .fold(value, |value, stage| stage.map_value(value))
    }
}
