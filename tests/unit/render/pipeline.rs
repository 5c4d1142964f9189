use super::*;
use crate::composition::dsl::CompositionBuilder;
use crate::layout::measure::FixedAdvanceMeasure;

fn scenario() -> Composition {
    CompositionBuilder::new("Hello world this is a test", 3.0)
        .build()
        .unwrap()
}

#[test]
fn sequence_metadata_reflects_the_timeline() {
    let seq = render_frames(&scenario(), &FixedAdvanceMeasure::default()).unwrap();
    assert_eq!(seq.frame_count, 90);
    assert_eq!(seq.frames.len(), 90);
    assert_eq!(seq.duration_secs, 3.0);
    assert_eq!(seq.rendered_secs, 3.0);
    assert_eq!(seq.canvas.width, 1080);
}

#[test]
fn unbounded_duration_is_capped() {
    let comp = CompositionBuilder::new("Hello", 1000.0).build().unwrap();
    let seq = render_frames(&comp, &FixedAdvanceMeasure::default()).unwrap();
    assert_eq!(seq.frame_count, 90);
    assert_eq!(seq.rendered_secs, 3.0);
}

#[test]
fn render_frame_matches_sequence_entry() {
    let comp = scenario();
    let measure = FixedAdvanceMeasure::default();
    let seq = render_frames(&comp, &measure).unwrap();
    let one = render_frame(&comp, FrameIndex(45), &measure).unwrap();
    assert_eq!(seq.frames[45], one);
}

#[test]
fn invalid_composition_is_rejected_up_front() {
    let mut comp = scenario();
    comp.duration_secs = -1.0;
    let err = render_frames(&comp, &FixedAdvanceMeasure::default()).unwrap_err();
    assert!(matches!(err, FramecastError::InvalidDuration(_)));
}

#[test]
fn parallel_mode_matches_sequential_output() {
    let comp = scenario();
    let measure = FixedAdvanceMeasure::default();
    let sequential = render_frames(&comp, &measure).unwrap();
    let parallel = render_frames_with(
        &comp,
        &measure,
        &RenderThreading {
            parallel: true,
            threads: Some(4),
        },
    )
    .unwrap();
    assert_eq!(sequential.frames, parallel.frames);
}
