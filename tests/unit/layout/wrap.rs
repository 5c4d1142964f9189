use super::*;
use crate::foundation::error::FramecastError;
use crate::layout::measure::FixedAdvanceMeasure;

/// Measurer that always fails, for propagation tests.
struct BrokenMeasure;

impl TextMeasure for BrokenMeasure {
    fn measure_width(&self, _text: &str, _size_px: f64) -> crate::FramecastResult<f64> {
        Err(FramecastError::measurement("backend unavailable"))
    }
}

fn measure() -> FixedAdvanceMeasure {
    // 10 px per character at size 10.
    FixedAdvanceMeasure { advance_em: 1.0 }
}

#[test]
fn words_accumulate_until_width_would_overflow() {
    // "aaa bbb ccc" at 10 px/char; candidate widths include the trailing
    // space, so "aaa bbb " is 80 px and "aaa bbb ccc " is 120 px.
    let lines = wrap_greedy("aaa bbb ccc", 10.0, 100.0, &measure()).unwrap();
    assert_eq!(lines, ["aaa bbb", "ccc"]);
}

#[test]
fn everything_fits_on_one_line_when_wide_enough() {
    let lines = wrap_greedy("aaa bbb ccc", 10.0, 1000.0, &measure()).unwrap();
    assert_eq!(lines, ["aaa bbb ccc"]);
}

#[test]
fn over_long_word_gets_its_own_line_unbroken() {
    let lines = wrap_greedy("aaaaaaaaaaaaaaaaaaaa bb", 10.0, 100.0, &measure()).unwrap();
    assert_eq!(lines, ["aaaaaaaaaaaaaaaaaaaa", "bb"]);
}

#[test]
fn last_partial_line_is_always_flushed() {
    let lines = wrap_greedy("a", 10.0, 100.0, &measure()).unwrap();
    assert_eq!(lines, ["a"]);

    let lines = wrap_greedy("", 10.0, 100.0, &measure()).unwrap();
    assert_eq!(lines, [""]);
}

#[test]
fn measurement_failure_is_propagated_not_swallowed() {
    let err = wrap_greedy("some text", 10.0, 100.0, &BrokenMeasure).unwrap_err();
    assert!(matches!(err, FramecastError::Measurement(_)));
}

#[test]
fn block_placement_centers_lines_vertically() {
    let lines = layout_block(
        vec!["one".to_string(), "two".to_string()],
        960.0,
        90.0,
    );
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].y_px, 870.0); // 960 - 2*90/2
    assert_eq!(lines[1].y_px, 960.0);
    assert_eq!(lines[0].text, "one");
}

#[test]
fn single_line_block_sits_just_above_center() {
    let lines = layout_block(vec!["only".to_string()], 960.0, 90.0);
    assert_eq!(lines[0].y_px, 915.0);
}
