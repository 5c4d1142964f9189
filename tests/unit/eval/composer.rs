use super::*;
use crate::composition::dsl::CompositionBuilder;
use crate::layout::measure::FixedAdvanceMeasure;

fn scenario() -> Composition {
    // 6 words, 3 s at 30 fps -> 90 frames.
    CompositionBuilder::new("Hello world this is a test", 3.0)
        .build()
        .unwrap()
}

fn compose(comp: &Composition, frame: u64) -> FrameDescriptor {
    Composer::compose_frame(comp, FrameIndex(frame), &FixedAdvanceMeasure::default()).unwrap()
}

#[test]
fn scenario_word_reveal_matches_formula() {
    let comp = scenario();

    let first = compose(&comp, 0);
    assert_eq!(first.visible_word_count, 1);
    assert_eq!(first.visible_text, "Hello");

    let mid = compose(&comp, 45);
    assert_eq!(mid.progress, 0.5);
    assert_eq!(mid.visible_word_count, 4);
    assert_eq!(mid.visible_text, "Hello world this is");

    let last = compose(&comp, 89);
    assert!((last.progress - 0.9888).abs() < 1e-3);
    assert_eq!(last.visible_word_count, 6);
    assert_eq!(last.visible_text, "Hello world this is a test");
}

#[test]
fn word_reveal_is_monotonic() {
    let comp = scenario();
    let mut prev = 0;
    for f in 0..90 {
        let desc = compose(&comp, f);
        assert!(desc.visible_word_count >= prev);
        prev = desc.visible_word_count;
    }
}

#[test]
fn opacity_envelope_rises_peaks_and_falls() {
    let comp = scenario();
    for f in 0..90 {
        let desc = compose(&comp, f);
        assert!((0.0..=1.0).contains(&desc.opacity));
    }
    assert!(compose(&comp, 0).opacity < 0.05);
    assert!(compose(&comp, 45).opacity > 0.95);
    assert!(compose(&comp, 89).opacity < 0.05);
}

#[test]
fn hue_advances_by_fixed_step_modulo_360() {
    let comp = scenario();
    for f in 0..90 {
        let desc = compose(&comp, f);
        assert_eq!(desc.hue_deg, (f as f64 * 2.0) % 360.0);
        assert_eq!(desc.hue2_deg, (desc.hue_deg + 60.0) % 360.0);
    }

    // Far enough along the timeline the hue wraps.
    let long = CompositionBuilder::new("Hello", 1000.0)
        .max_frames(400)
        .build()
        .unwrap();
    let wrapped = Composer::compose_frame(
        &long,
        FrameIndex(200),
        &FixedAdvanceMeasure::default(),
    )
    .unwrap();
    assert_eq!(wrapped.hue_deg, 40.0); // 400 mod 360
}

#[test]
fn progress_bar_is_non_decreasing_and_maximal_last() {
    let comp = scenario();
    let mut prev = -1.0;
    for f in 0..90 {
        let desc = compose(&comp, f);
        assert!(desc.progress_bar_width_px >= prev);
        prev = desc.progress_bar_width_px;
    }
    let last = compose(&comp, 89);
    assert!(last.progress_bar_width_px <= 1080.0);
    assert!(last.progress_bar_width_px > 1060.0);
}

#[test]
fn circles_oscillate_out_of_phase_around_midpoint() {
    let comp = scenario();
    let desc = compose(&comp, 10);
    let mid = 540.0;
    assert_eq!(desc.circle_top.x - mid, desc.decoration_offset_px);
    assert_eq!(mid - desc.circle_bottom.x, desc.decoration_offset_px);
    assert_eq!(desc.circle_top.y, 300.0);
    assert_eq!(desc.circle_bottom.y, 1620.0);
    assert!(desc.decoration_offset_px.abs() <= 200.0);
}

#[test]
fn empty_script_composes_every_frame() {
    let comp = CompositionBuilder::new("", 3.0).build().unwrap();
    for f in 0..90 {
        let desc = compose(&comp, f);
        assert_eq!(desc.visible_word_count, 1);
        assert_eq!(desc.visible_text, "");
    }
}

#[test]
fn out_of_bounds_frame_is_rejected() {
    let comp = scenario();
    let err = Composer::compose_frame(
        &comp,
        FrameIndex(90),
        &FixedAdvanceMeasure::default(),
    )
    .unwrap_err();
    assert!(matches!(err, FramecastError::Validation(_)));
}

#[test]
fn single_frame_composition_has_zero_progress() {
    let comp = CompositionBuilder::new("Hello world", 0.01).build().unwrap();
    let desc = compose(&comp, 0);
    assert_eq!(desc.progress, 0.0);
    assert_eq!(desc.visible_word_count, 1);
    assert_eq!(desc.progress_bar_width_px, 0.0);
}

#[test]
fn lines_are_centered_on_canvas_midpoint() {
    let comp = scenario();
    let desc = compose(&comp, 89);
    assert!(!desc.lines.is_empty());
    let count = desc.lines.len() as f64;
    let expected_start = 960.0 - count * 90.0 / 2.0;
    assert_eq!(desc.lines[0].y_px, expected_start);
    for (i, line) in desc.lines.iter().enumerate() {
        assert_eq!(line.y_px, expected_start + i as f64 * 90.0);
    }
}
