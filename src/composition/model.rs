use crate::{
    foundation::core::{Canvas, Fps},
    foundation::error::{FramecastError, FramecastResult},
    script::tokens::Script,
    timeline::mapper::Timeline,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete frame-synthesis job description.
///
/// A composition is a pure data model: the script to reveal, the playback
/// duration, and every visual parameter the composer and serializer need.
/// All style fields default to the canonical 9:16 portrait look, so a JSON
/// document carrying only `script` and `duration_secs` is valid.
///
/// An empty script is not rejected; it normalizes to a single empty token
/// (see [`Script`]), which renders as an empty text block.
///
/// Rendering a composition is performed by the pipeline:
/// [`crate::render_frame`] / [`crate::render_frames`].
pub struct Composition {
    /// Script whose words are revealed over the animation.
    pub script: Script,
    /// Target playback duration in seconds; must be finite and > 0.
    pub duration_secs: f64,
    /// Timeline frame rate.
    #[serde(default = "default_fps")]
    pub fps: Fps,
    /// Output canvas dimensions.
    #[serde(default = "default_canvas")]
    pub canvas: Canvas,
    /// Hard cap on generated frames, bounding output size for any duration.
    #[serde(default = "default_max_frames")]
    pub max_frames: u64,
    /// Text block styling.
    #[serde(default)]
    pub text: TextStyle,
    /// Animated background gradient parameters.
    #[serde(default)]
    pub gradient: GradientStyle,
    /// Decorative circle parameters.
    #[serde(default)]
    pub decor: DecorStyle,
    /// Playback progress bar parameters.
    #[serde(default)]
    pub progress_bar: ProgressBarStyle,
}

fn default_fps() -> Fps {
    Fps { num: 30, den: 1 }
}

fn default_canvas() -> Canvas {
    Canvas {
        width: 1080,
        height: 1920,
    }
}

fn default_max_frames() -> u64 {
    90
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Text block styling for the revealed script.
pub struct TextStyle {
    /// Font size in pixels.
    pub size_px: f64,
    /// Maximum line width for greedy word wrap, in pixels.
    pub max_line_width_px: f64,
    /// Vertical distance between consecutive lines, in pixels.
    pub line_height_px: f64,
    /// Font family passed through to the output markup.
    pub font_family: String,
    /// Text color as straight-alpha RGBA8.
    pub color_rgba8: [u8; 4],
    /// Drop shadow behind the text.
    pub shadow: ShadowStyle,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size_px: 64.0,
            max_line_width_px: 920.0,
            line_height_px: 90.0,
            font_family: "Arial, sans-serif".to_string(),
            color_rgba8: [255, 255, 255, 255],
            shadow: ShadowStyle::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// Drop shadow parameters.
pub struct ShadowStyle {
    /// Horizontal offset in pixels.
    pub dx_px: f64,
    /// Vertical offset in pixels.
    pub dy_px: f64,
    /// Blur standard deviation in pixels.
    pub blur_px: f64,
    /// Shadow color as straight-alpha RGBA8.
    pub color_rgba8: [u8; 4],
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            dx_px: 4.0,
            dy_px: 4.0,
            blur_px: 8.0,
            color_rgba8: [0, 0, 0, 204],
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// Animated background gradient parameters.
///
/// The first stop's hue advances by `hue_step_deg` per frame (a function of
/// frame index, not progress); the second stop sits `hue_offset_deg` further
/// around the wheel.
pub struct GradientStyle {
    /// Hue advance per frame, in degrees.
    pub hue_step_deg: f64,
    /// Offset of the second gradient stop, in degrees.
    pub hue_offset_deg: f64,
    /// HSL saturation of both stops, percent in `[0, 100]`.
    pub saturation_pct: f64,
    /// HSL lightness of both stops, percent in `[0, 100]`.
    pub lightness_pct: f64,
}

impl Default for GradientStyle {
    fn default() -> Self {
        Self {
            hue_step_deg: 2.0,
            hue_offset_deg: 60.0,
            saturation_pct: 70.0,
            lightness_pct: 50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// Decorative circle parameters.
///
/// Two circles oscillate out of phase around the horizontal midpoint, one
/// anchored near the top of the canvas and one near the bottom.
pub struct DecorStyle {
    /// Circle radius in pixels.
    pub circle_radius_px: f64,
    /// Horizontal oscillation amplitude in pixels.
    pub sway_amplitude_px: f64,
    /// Vertical anchor of the top circle, in pixels.
    pub top_center_y_px: f64,
    /// Vertical anchor of the bottom circle, in pixels.
    pub bottom_center_y_px: f64,
    /// Circle fill as straight-alpha RGBA8.
    pub color_rgba8: [u8; 4],
}

impl Default for DecorStyle {
    fn default() -> Self {
        Self {
            circle_radius_px: 100.0,
            sway_amplitude_px: 200.0,
            top_center_y_px: 300.0,
            bottom_center_y_px: 1620.0,
            color_rgba8: [255, 255, 255, 26],
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// Playback progress bar parameters.
pub struct ProgressBarStyle {
    /// Bar height in pixels; the bar hugs the bottom canvas edge.
    pub height_px: f64,
    /// Bar fill as straight-alpha RGBA8.
    pub color_rgba8: [u8; 4],
}

impl Default for ProgressBarStyle {
    fn default() -> Self {
        Self {
            height_px: 20.0,
            color_rgba8: [255, 255, 255, 128],
        }
    }
}

impl Composition {
    /// Validate composition invariants.
    pub fn validate(&self) -> FramecastResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(FramecastError::invalid_duration(
                "duration_secs must be finite and > 0",
            ));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(FramecastError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(FramecastError::validation("canvas width/height must be > 0"));
        }
        if self.max_frames == 0 {
            return Err(FramecastError::validation("max_frames must be > 0"));
        }

        for (name, value) in [
            ("text size_px", self.text.size_px),
            ("text max_line_width_px", self.text.max_line_width_px),
            ("text line_height_px", self.text.line_height_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FramecastError::validation(format!(
                    "{name} must be finite and > 0",
                )));
            }
        }
        for (name, value) in [
            ("shadow dx_px", self.text.shadow.dx_px),
            ("shadow dy_px", self.text.shadow.dy_px),
            ("gradient hue_step_deg", self.gradient.hue_step_deg),
            ("gradient hue_offset_deg", self.gradient.hue_offset_deg),
            ("decor top_center_y_px", self.decor.top_center_y_px),
            ("decor bottom_center_y_px", self.decor.bottom_center_y_px),
        ] {
            if !value.is_finite() {
                return Err(FramecastError::validation(format!(
                    "{name} must be finite",
                )));
            }
        }
        for (name, value) in [
            ("shadow blur_px", self.text.shadow.blur_px),
            ("decor circle_radius_px", self.decor.circle_radius_px),
            ("decor sway_amplitude_px", self.decor.sway_amplitude_px),
            ("progress_bar height_px", self.progress_bar.height_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FramecastError::validation(format!(
                    "{name} must be finite and >= 0",
                )));
            }
        }
        for (name, value) in [
            ("gradient saturation_pct", self.gradient.saturation_pct),
            ("gradient lightness_pct", self.gradient.lightness_pct),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(FramecastError::validation(format!(
                    "{name} must be within [0, 100]",
                )));
            }
        }
        if self.text.font_family.trim().is_empty() {
            return Err(FramecastError::validation(
                "text font_family must be non-empty",
            ));
        }

        Ok(())
    }

    /// Timeline derived from this composition's duration, fps and cap.
    pub fn timeline(&self) -> FramecastResult<Timeline> {
        Timeline::new(self.duration_secs, self.fps, self.max_frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
