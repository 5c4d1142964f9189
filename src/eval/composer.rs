use std::f64::consts::PI;

use crate::{
    composition::model::Composition,
    foundation::core::{FrameIndex, Point},
    foundation::error::{FramecastError, FramecastResult},
    layout::measure::TextMeasure,
    layout::wrap::{TextLine, layout_block, wrap_greedy},
    timeline::mapper::Timeline,
};

#[derive(Clone, Debug, serde::Serialize)]
/// The complete, immutable set of visual parameters for one frame.
///
/// Constructed fresh per frame by [`Composer`]; never mutated, never cached.
pub struct FrameDescriptor {
    /// Frame index within the generated sequence.
    pub frame: FrameIndex,
    /// Normalized playback position in `[0, 1)`.
    pub progress: f64,
    /// Number of words revealed, in `[1, word_count]`.
    pub visible_word_count: usize,
    /// Revealed prefix of the script, space-joined.
    pub visible_text: String,
    /// Wrapped and vertically placed lines of the revealed text.
    pub lines: Vec<TextLine>,
    /// Text opacity envelope `sin(progress * PI)`: rises from 0, peaks at
    /// the midpoint, returns to 0.
    pub opacity: f64,
    /// First gradient stop hue in degrees, `[0, 360)`.
    pub hue_deg: f64,
    /// Second gradient stop hue in degrees, `[0, 360)`.
    pub hue2_deg: f64,
    /// Horizontal oscillation of the decorative circles in pixels.
    pub decoration_offset_px: f64,
    /// Center of the top decorative circle.
    pub circle_top: Point,
    /// Center of the bottom decorative circle.
    pub circle_bottom: Point,
    /// Width of the playback progress bar in pixels.
    pub progress_bar_width_px: f64,
}

/// Stateless evaluator from composition and frame index to frame descriptor.
pub struct Composer;

impl Composer {
    #[tracing::instrument(skip(comp, measure))]
    /// Compose one frame, validating the composition first.
    pub fn compose_frame(
        comp: &Composition,
        frame: FrameIndex,
        measure: &dyn TextMeasure,
    ) -> FramecastResult<FrameDescriptor> {
        comp.validate()?;
        let timeline = comp.timeline()?;
        Self::compose_frame_prepared(comp, &timeline, frame, measure)
    }

    /// Compose against a precomputed timeline; composition assumed valid.
    pub(crate) fn compose_frame_prepared(
        comp: &Composition,
        timeline: &Timeline,
        frame: FrameIndex,
        measure: &dyn TextMeasure,
    ) -> FramecastResult<FrameDescriptor> {
        if frame.0 >= timeline.frame_count() {
            return Err(FramecastError::validation("frame is out of bounds"));
        }

        let progress = timeline.progress(frame);
        let word_count = comp.script.word_count();
        let visible_word_count =
            (((progress * word_count as f64).floor() as usize) + 1).min(word_count);
        let visible_text = comp.script.visible_words(visible_word_count);

        let wrapped = wrap_greedy(
            &visible_text,
            comp.text.size_px,
            comp.text.max_line_width_px,
            measure,
        )?;
        let lines = layout_block(wrapped, comp.canvas.center_y(), comp.text.line_height_px);

        let opacity = (progress * PI).sin().clamp(0.0, 1.0);
        let hue_deg = (frame.0 as f64 * comp.gradient.hue_step_deg).rem_euclid(360.0);
        let hue2_deg = (hue_deg + comp.gradient.hue_offset_deg).rem_euclid(360.0);
        let decoration_offset_px = (progress * PI * 4.0).sin() * comp.decor.sway_amplitude_px;
        let mid_x = comp.canvas.center_x();

        Ok(FrameDescriptor {
            frame,
            progress,
            visible_word_count,
            visible_text,
            lines,
            opacity,
            hue_deg,
            hue2_deg,
            decoration_offset_px,
            circle_top: Point::new(mid_x + decoration_offset_px, comp.decor.top_center_y_px),
            circle_bottom: Point::new(
                mid_x - decoration_offset_px,
                comp.decor.bottom_center_y_px,
            ),
            progress_bar_width_px: f64::from(comp.canvas.width) * progress,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/composer.rs"]
mod tests;
