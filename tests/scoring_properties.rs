//! Scoring math properties
//!
//! The sub-score derivation and similarity rescaling are the load-bearing
//! arithmetic of the whole tool; pin them down exactly.

use uxcompare::scoring::engine::{derive_criteria, rescale_similarity};

#[test]
fn rescale_is_the_documented_bijection() {
    assert_eq!(rescale_similarity(-1.0), 0.0);
    assert_eq!(rescale_similarity(0.0), 0.5);
    assert_eq!(rescale_similarity(1.0), 1.0);
}

#[test]
fn rescale_is_monotonic() {
    let mut previous = f64::NEG_INFINITY;
    let mut raw = -1.0;
    while raw <= 1.0 {
        let rescaled = rescale_similarity(raw);
        assert!(rescaled > previous);
        previous = rescaled;
        raw += 0.01;
    }
}

#[test]
fn sub_scores_match_the_offset_table() {
    let criteria = derive_criteria(0.42);
    assert_eq!(criteria.relevance, 0.42);
    assert_eq!(criteria.modernity, 0.47);
    assert_eq!(criteria.consistency, 0.49);
    assert_eq!(criteria.visual_appeal, 0.5);
    assert_eq!(criteria.clarity, 0.52);
}

#[test]
fn sub_scores_never_exceed_one() {
    let mut base = 0.0;
    while base <= 1.0 {
        let criteria = derive_criteria(base);
        for value in [
            criteria.clarity,
            criteria.modernity,
            criteria.relevance,
            criteria.consistency,
            criteria.visual_appeal,
        ] {
            assert!(value <= 1.0, "sub-score {} above 1.0 for base {}", value, base);
            assert!(value >= 0.0);
        }
        base += 0.005;
    }
}

#[test]
fn sub_score_ordering_invariant_holds_for_any_base() {
    // Relevance <= {Modernity, Consistency, Visual Appeal} <= Clarity
    let mut base = 0.0;
    while base <= 1.0 {
        let c = derive_criteria(base);
        assert!(c.relevance <= c.modernity);
        assert!(c.relevance <= c.consistency);
        assert!(c.relevance <= c.visual_appeal);
        assert!(c.modernity <= c.clarity);
        assert!(c.consistency <= c.clarity);
        assert!(c.visual_appeal <= c.clarity);
        base += 0.005;
    }
}

#[test]
fn sub_scores_are_rounded_to_two_decimals() {
    let criteria = derive_criteria(0.123456);
    for value in [
        criteria.clarity,
        criteria.modernity,
        criteria.relevance,
        criteria.consistency,
        criteria.visual_appeal,
    ] {
        let scaled = value * 100.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "{} is not two-decimal",
            value
        );
    }
}
