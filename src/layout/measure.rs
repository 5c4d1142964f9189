use std::sync::Mutex;

use crate::foundation::error::{FramecastError, FramecastResult};

/// Text width measurement collaborator.
///
/// Different rendering back ends measure text differently; the wrap
/// algorithm is fixed but the measurement is pluggable. Implementations must
/// be `Send + Sync` so the parallel pipeline can share one measurer across
/// worker threads. Failures surface as [`FramecastError::Measurement`] and
/// are propagated, never swallowed.
pub trait TextMeasure: Send + Sync {
    /// Advance width of `text` at `size_px`, in pixels.
    fn measure_width(&self, text: &str, size_px: f64) -> FramecastResult<f64>;
}

#[derive(Clone, Copy, Debug)]
/// Deterministic per-character advance estimate.
///
/// Width is `char_count * size_px * advance_em`. Crude but stable across
/// platforms, which makes it the default for tests and headless use.
pub struct FixedAdvanceMeasure {
    /// Average glyph advance as a fraction of the font size.
    pub advance_em: f64,
}

impl Default for FixedAdvanceMeasure {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure_width(&self, text: &str, size_px: f64) -> FramecastResult<f64> {
        Ok(text.chars().count() as f64 * size_px * self.advance_em)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
struct BrushRgba8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

/// Shaping-backed measurer built from caller-provided font bytes.
///
/// Shapes the text with Parley and reports the widest line advance. Parley
/// contexts are not shareable across threads, so they sit behind a mutex;
/// measurement serializes, frame synthesis around it does not.
pub struct ParleyMeasure {
    state: Mutex<ParleyState>,
}

struct ParleyState {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<BrushRgba8>,
    family_name: String,
}

impl ParleyMeasure {
    /// Register `font_bytes` and resolve the family used for shaping.
    pub fn new(font_bytes: &[u8]) -> FramecastResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            FramecastError::measurement("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| FramecastError::measurement("registered font family has no name"))?
            .to_string();

        Ok(Self {
            state: Mutex::new(ParleyState {
                font_ctx,
                layout_ctx: parley::LayoutContext::new(),
                family_name,
            }),
        })
    }

    /// Family name resolved from the registered font bytes.
    pub fn family_name(&self) -> FramecastResult<String> {
        let state = self
            .state
            .lock()
            .map_err(|_| FramecastError::measurement("text measurer lock poisoned"))?;
        Ok(state.family_name.clone())
    }
}

impl TextMeasure for ParleyMeasure {
    fn measure_width(&self, text: &str, size_px: f64) -> FramecastResult<f64> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(FramecastError::measurement(
                "text size_px must be finite and > 0",
            ));
        }

        let mut state = self
            .state
            .lock()
            .map_err(|_| FramecastError::measurement("text measurer lock poisoned"))?;
        let ParleyState {
            font_ctx,
            layout_ctx,
            family_name,
        } = &mut *state;

        let mut builder = layout_ctx.ranged_builder(font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px as f32));
        builder.push_default(parley::style::StyleProperty::Brush(BrushRgba8::default()));

        let mut layout: parley::Layout<BrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        let mut width = 0.0f64;
        for line in layout.lines() {
            width = width.max(f64::from(line.metrics().advance));
        }
        Ok(width)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
