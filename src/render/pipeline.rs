use rayon::prelude::*;

use crate::{
    composition::model::Composition,
    eval::composer::Composer,
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::{FramecastError, FramecastResult},
    layout::measure::TextMeasure,
    render::svg::serialize_frame,
};

#[derive(Clone, Debug, Default)]
/// Threading controls for multi-frame synthesis.
pub struct RenderThreading {
    /// Enable parallel synthesis when `true`.
    pub parallel: bool,
    /// Override rayon worker threads; `None` uses rayon defaults.
    pub threads: Option<usize>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Output of a full synthesis run: the ordered frame documents plus the
/// metadata a delivery layer needs to assemble a playable artifact.
pub struct FrameSequence {
    /// Per-frame SVG documents in playback order.
    pub frames: Vec<String>,
    /// Number of generated frames (after the cap).
    pub frame_count: u64,
    /// Requested playback duration in seconds.
    pub duration_secs: f64,
    /// Playback duration covered by the generated frames, in seconds.
    pub rendered_secs: f64,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas dimensions.
    pub canvas: Canvas,
}

#[tracing::instrument(skip(comp, measure))]
/// Compose + serialize a single frame.
///
/// This is the primary one-shot API for producing markup from a
/// [`Composition`].
pub fn render_frame(
    comp: &Composition,
    frame: FrameIndex,
    measure: &dyn TextMeasure,
) -> FramecastResult<String> {
    let desc = Composer::compose_frame(comp, frame, measure)?;
    Ok(serialize_frame(&desc, comp))
}

/// Render the full frame sequence sequentially.
pub fn render_frames(
    comp: &Composition,
    measure: &dyn TextMeasure,
) -> FramecastResult<FrameSequence> {
    render_frames_with(comp, measure, &RenderThreading::default())
}

#[tracing::instrument(skip(comp, measure, threading))]
/// Render the full frame sequence with explicit threading controls.
///
/// Frames have no ordering dependency, so the parallel mode produces output
/// byte-identical to the sequential mode.
pub fn render_frames_with(
    comp: &Composition,
    measure: &dyn TextMeasure,
    threading: &RenderThreading,
) -> FramecastResult<FrameSequence> {
    comp.validate()?;
    let timeline = comp.timeline()?;
    let count = timeline.frame_count();

    let frames = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            (0..count)
                .into_par_iter()
                .map(|f| {
                    let desc =
                        Composer::compose_frame_prepared(comp, &timeline, FrameIndex(f), measure)?;
                    Ok(serialize_frame(&desc, comp))
                })
                .collect::<FramecastResult<Vec<_>>>()
        })?
    } else {
        let mut out = Vec::with_capacity(count as usize);
        for frame in timeline.indices() {
            let desc = Composer::compose_frame_prepared(comp, &timeline, frame, measure)?;
            out.push(serialize_frame(&desc, comp));
        }
        out
    };

    Ok(FrameSequence {
        frames,
        frame_count: count,
        duration_secs: comp.duration_secs,
        rendered_secs: comp.fps.frames_to_secs(count),
        fps: comp.fps,
        canvas: comp.canvas,
    })
}

fn build_thread_pool(threads: Option<usize>) -> FramecastResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n.max(1));
    }
    builder
        .build()
        .map_err(|e| FramecastError::Other(anyhow::anyhow!("failed to build thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
