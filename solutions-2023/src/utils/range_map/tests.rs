//! Tests for the range remapping engine.

use super::*;
use proptest::prelude::*;

fn rule(destination_start: u64, source_start: u64, length: u64) -> MapRule {
    MapRule {
        destination_start,
        source_start,
        length,
    }
}

// A single stage shifting source [5, 8) to destination [10, 13).
fn small_stage() -> RuleSet {
    RuleSet::new(vec![rule(10, 5, 3)])
}

#[test]
fn empty_rule_set_is_identity() {
    let stage = RuleSet::new(vec![]);
    assert_eq!(stage.map_span(Span::new(3, 10)), vec![Span::new(3, 10)]);
    assert_eq!(stage.map_value(42), 42);
}

#[test]
fn span_fully_inside_rule_is_translated() {
    assert_eq!(
        small_stage().map_span(Span::new(6, 8)),
        vec![Span::new(11, 13)]
    );
}

#[test]
fn exact_containment_maps_the_whole_rule() {
    assert_eq!(
        small_stage().map_span(Span::new(5, 8)),
        vec![Span::new(10, 13)]
    );
}

#[test]
fn touching_boundaries_do_not_overlap() {
    // Ends exactly at the rule's start: identity.
    assert_eq!(
        small_stage().map_span(Span::new(3, 5)),
        vec![Span::new(3, 5)]
    );
    // Begins exactly at the rule's end: identity.
    assert_eq!(
        small_stage().map_span(Span::new(8, 10)),
        vec![Span::new(8, 10)]
    );
}

#[test]
fn left_straddle_splits_at_rule_start() {
    assert_eq!(
        small_stage().map_span(Span::new(3, 7)),
        vec![Span::new(3, 5), Span::new(10, 12)]
    );
}

#[test]
fn left_straddle_ending_exactly_at_rule_end() {
    // The end boundary coincides with the rule's end; the overlapping part
    // must still be translated, not identity-mapped.
    assert_eq!(
        small_stage().map_span(Span::new(3, 8)),
        vec![Span::new(3, 5), Span::new(10, 13)]
    );
}

#[test]
fn right_straddle_splits_at_rule_end() {
    assert_eq!(
        small_stage().map_span(Span::new(6, 10)),
        vec![Span::new(8, 10), Span::new(11, 13)]
    );
}

#[test]
fn span_containing_rule_splits_three_ways() {
    assert_eq!(
        small_stage().map_span(Span::new(3, 10)),
        vec![Span::new(3, 5), Span::new(8, 10), Span::new(10, 13)]
    );
}

#[test]
fn seed_span_translates_inside_wide_rule() {
    // Stage from the worked almanac example: [79, 93) sits inside the
    // second rule's source [50, 98) and shifts by +2.
    let stage = RuleSet::new(vec![rule(50, 98, 2), rule(52, 50, 48)]);
    assert_eq!(
        stage.map_span(Span::new(79, 93)),
        vec![Span::new(81, 95)]
    );
    assert_eq!(stage.map_value(79), 81);
    assert_eq!(stage.map_value(92), 94);
}

#[test]
fn zero_width_span_is_safe() {
    let stage = small_stage();
    // Inside a rule: translated, still zero-width.
    assert_eq!(stage.map_span(Span::new(6, 6)), vec![Span::new(11, 11)]);
    // Left of the rule and right of it: identity.
    assert_eq!(stage.map_span(Span::new(4, 4)), vec![Span::new(4, 4)]);
    assert_eq!(stage.map_span(Span::new(9, 9)), vec![Span::new(9, 9)]);
    // At the rule's exclusive end: identity, per the half-open convention.
    assert_eq!(stage.map_span(Span::new(8, 8)), vec![Span::new(8, 8)]);
}

#[test]
fn overlapping_rules_resolve_to_first_in_source_order() {
    // Sources [5, 15) and [10, 20) overlap on [10, 15); the rule starting
    // earlier wins there.
    let stage = RuleSet::new(vec![rule(100, 10, 10), rule(200, 5, 10)]);
    assert_eq!(stage.map_value(12), 207);
}

#[test]
fn pipeline_chains_stages_in_order() {
    let pipeline = Pipeline::new(vec![
        RuleSet::new(vec![rule(10, 0, 5)]),  // [0,5) -> [10,15)
        RuleSet::new(vec![rule(100, 12, 2)]), // [12,14) -> [100,102)
    ]);
    assert_eq!(pipeline.run_value(3), 101);
    assert_eq!(
        pipeline.run(vec![Span::new(0, 5)]),
        vec![Span::new(10, 12), Span::new(14, 15), Span::new(100, 102)]
    );
}

#[test]
fn pipeline_with_no_stages_is_identity() {
    let pipeline = Pipeline::new(vec![]);
    assert_eq!(pipeline.run_value(7), 7);
    assert_eq!(pipeline.run(vec![Span::new(1, 4)]), vec![Span::new(1, 4)]);
}

// Bounded domains keep source_start + length and translate() far from
// u64 overflow while still exercising every overlap shape.
fn arb_rule() -> impl Strategy<Value = MapRule> {
    (0u64..1 << 32, 0u64..1 << 32, 1u64..1 << 16).prop_map(
        |(destination_start, source_start, length)| MapRule {
            destination_start,
            source_start,
            length,
        },
    )
}

fn arb_stage() -> impl Strategy<Value = RuleSet> {
    prop::collection::vec(arb_rule(), 0..8).prop_map(RuleSet::new)
}

fn arb_span() -> impl Strategy<Value = Span> {
    (0u64..1 << 32, 0u64..1 << 16).prop_map(|(begin, width)| Span::new(begin, begin + width))
}

/// Reference scalar lookup written independently of the interval engine:
/// first rule (in source_start order) whose source interval contains the
/// point, identity otherwise.
fn reference_lookup(stage: &RuleSet, value: u64) -> u64 {
    stage
        .rules()
        .iter()
        .find(|r| value >= r.source_start && value < r.source_start + r.length)
        .map_or(value, |r| r.destination_start + (value - r.source_start))
}

proptest! {
    /// Any span passes through an empty stage unchanged.
    #[test]
    fn prop_empty_stage_is_identity(span in arb_span()) {
        let stage = RuleSet::new(vec![]);
        prop_assert_eq!(stage.map_span(span), vec![span]);
    }

    /// Splitting preserves total measure: every rule is a pure translation,
    /// so the output widths must sum to the input width.
    #[test]
    fn prop_total_width_is_preserved(stage in arb_stage(), span in arb_span()) {
        let image = stage.map_span(span);
        let total: u64 = image.iter().map(Span::width).sum();
        prop_assert_eq!(total, span.width());
    }

    /// The scalar path agrees with an independently written point lookup.
    #[test]
    fn prop_scalar_lookup_matches_reference(stage in arb_stage(), value in 0u64..1 << 32) {
        prop_assert_eq!(stage.map_value(value), reference_lookup(&stage, value));
    }

    /// A unit span's image is the scalar image, as a unit span.
    #[test]
    fn prop_unit_span_matches_scalar(stage in arb_stage(), value in 0u64..1 << 32) {
        let mapped = stage.map_value(value);
        prop_assert_eq!(
            stage.map_span(Span::new(value, value + 1)),
            vec![Span::new(mapped, mapped + 1)]
        );
    }

    /// Running a two-stage pipeline equals running the stages by hand and
    /// unioning per-span images.
    #[test]
    fn prop_pipeline_composes_stagewise(
        first in arb_stage(),
        second in arb_stage(),
        span in arb_span(),
    ) {
        let pipeline = Pipeline::new(vec![first.clone(), second.clone()]);
        let mut composed = pipeline.run(vec![span]);

        let mut manual: Vec<Span> = first
            .map_span(span)
            .into_iter()
            .flat_map(|s| second.map_span(s))
            .collect();

        composed.sort_unstable();
        manual.sort_unstable();
        prop_assert_eq!(composed, manual);
    }

    /// Mapping is deterministic: two runs over the same inputs agree.
    #[test]
    fn prop_map_span_is_deterministic(stage in arb_stage(), span in arb_span()) {
        prop_assert_eq!(stage.map_span(span), stage.map_span(span));
    }

    /// Spans starting where they end never split or loop.
    #[test]
    fn prop_zero_width_spans_are_total(stage in arb_stage(), point in 0u64..1 << 32) {
        let image = stage.map_span(Span::new(point, point));
        prop_assert_eq!(image.len(), 1);
        prop_assert!(image[0].is_empty());
    }
}
