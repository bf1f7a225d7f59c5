// File: crates/linechart-core/tests/gaps.rs
// Purpose: Validate gap-aware path segmentation and palette cycling.

use linechart_core::{ChartEngine, Sample, YValue};

#[test]
fn missing_value_splits_the_polyline() {
    let engine = ChartEngine::new();
    let samples = vec![
        Sample::new(0.0, 1.0),
        Sample::missing(1.0),
        Sample::new(2.0, 3.0),
    ];
    let plan = engine.render("gap", &samples).expect("plan");

    let segments = &plan.sub_series[0].segments;
    assert_eq!(segments.len(), 2, "gap must split the line in two");
    assert_eq!(segments[0].len(), 1);
    assert_eq!(segments[1].len(), 1);

    // No vertex bridges the gap: the two runs sit at x=0 and x=2.
    assert!((segments[0][0].x - 0.0).abs() < 1e-4);
    assert!((segments[1][0].x - plan.inner_width()).abs() < 1e-4);
}

#[test]
fn leading_and_trailing_gaps_produce_no_empty_segments() {
    let engine = ChartEngine::new();
    let samples = vec![
        Sample::missing(0.0),
        Sample::new(1.0, 2.0),
        Sample::new(2.0, 3.0),
        Sample::missing(3.0),
        Sample::missing(4.0),
    ];
    let plan = engine.render("edges", &samples).expect("plan");

    let segments = &plan.sub_series[0].segments;
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].len(), 2);
}

#[test]
fn consecutive_gaps_collapse_into_one_break() {
    let engine = ChartEngine::new();
    let samples = vec![
        Sample::new(0.0, 1.0),
        Sample::missing(1.0),
        Sample::missing(2.0),
        Sample::missing(3.0),
        Sample::new(4.0, 2.0),
    ];
    let plan = engine.render("run of gaps", &samples).expect("plan");
    assert_eq!(plan.sub_series[0].segments.len(), 2);
}

#[test]
fn vector_sub_series_break_independently() {
    // Sub-series 0 loses its last point, sub-series 1 its first.
    let engine = ChartEngine::new();
    let samples = vec![
        Sample::new(0.0, YValue::vector(vec![Some(1.0), None])),
        Sample::new(1.0, YValue::vector(vec![Some(2.0), Some(4.0)])),
        Sample::new(2.0, YValue::vector(vec![None, Some(5.0)])),
    ];
    let plan = engine.render("round trip", &samples).expect("plan");
    assert_eq!(plan.sub_series.len(), 2);

    let first = &plan.sub_series[0].segments;
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].len(), 2);
    assert!((first[0][0].x - 0.0).abs() < 1e-4);
    assert!((first[0][1].x - plan.inner_width() / 2.0).abs() < 1e-4);

    let second = &plan.sub_series[1].segments;
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].len(), 2);
    assert!((second[0][0].x - plan.inner_width() / 2.0).abs() < 1e-4);
    assert!((second[0][1].x - plan.inner_width()).abs() < 1e-4);
}

#[test]
fn color_indices_cycle_through_the_palette() {
    let engine = ChartEngine::new();
    let samples = vec![Sample::new(
        0.0,
        YValue::vector(vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]),
    )];
    let plan = engine.render("four lines", &samples).expect("plan");

    let indices: Vec<usize> = plan.sub_series.iter().map(|s| s.color_index).collect();
    assert_eq!(indices, vec![0, 1, 2, 0], "default palette has three colors");
}
