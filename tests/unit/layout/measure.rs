use super::*;

#[test]
fn fixed_advance_scales_with_chars_and_size() {
    let m = FixedAdvanceMeasure { advance_em: 0.5 };
    assert_eq!(m.measure_width("abcd", 10.0).unwrap(), 20.0);
    assert_eq!(m.measure_width("", 10.0).unwrap(), 0.0);
    assert_eq!(m.measure_width("ab", 64.0).unwrap(), 64.0);
}

#[test]
fn fixed_advance_counts_chars_not_bytes() {
    let m = FixedAdvanceMeasure { advance_em: 1.0 };
    assert_eq!(m.measure_width("éé", 10.0).unwrap(), 20.0);
}

#[test]
fn default_advance_is_six_tenths_em() {
    let m = FixedAdvanceMeasure::default();
    assert_eq!(m.measure_width("a", 100.0).unwrap(), 60.0);
}

#[test]
fn parley_measure_rejects_garbage_font_bytes() {
    assert!(ParleyMeasure::new(&[0u8; 16]).is_err());
}
