use crate::{
    composition::model::{
        Composition, DecorStyle, GradientStyle, ProgressBarStyle, TextStyle,
    },
    foundation::core::{Canvas, Fps},
    foundation::error::FramecastResult,
    script::tokens::Script,
};

/// Fluent constructor for [`Composition`].
///
/// Starts from the canonical defaults; `build` validates.
pub struct CompositionBuilder {
    script: Script,
    duration_secs: f64,
    fps: Fps,
    canvas: Canvas,
    max_frames: u64,
    text: TextStyle,
    gradient: GradientStyle,
    decor: DecorStyle,
    progress_bar: ProgressBarStyle,
}

impl CompositionBuilder {
    pub fn new(script_text: impl Into<String>, duration_secs: f64) -> Self {
        Self {
            script: Script::parse(script_text),
            duration_secs,
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 1080,
                height: 1920,
            },
            max_frames: 90,
            text: TextStyle::default(),
            gradient: GradientStyle::default(),
            decor: DecorStyle::default(),
            progress_bar: ProgressBarStyle::default(),
        }
    }

    pub fn fps(mut self, fps: Fps) -> Self {
        self.fps = fps;
        self
    }

    pub fn canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = max_frames;
        self
    }

    pub fn text(mut self, text: TextStyle) -> Self {
        self.text = text;
        self
    }

    pub fn gradient(mut self, gradient: GradientStyle) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn decor(mut self, decor: DecorStyle) -> Self {
        self.decor = decor;
        self
    }

    pub fn progress_bar(mut self, progress_bar: ProgressBarStyle) -> Self {
        self.progress_bar = progress_bar;
        self
    }

    pub fn build(self) -> FramecastResult<Composition> {
        let comp = Composition {
            script: self.script,
            duration_secs: self.duration_secs,
            fps: self.fps,
            canvas: self.canvas,
            max_frames: self.max_frames,
            text: self.text,
            gradient: self.gradient,
            decor: self.decor,
            progress_bar: self.progress_bar,
        };
        comp.validate()?;
        Ok(comp)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
