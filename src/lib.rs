//! Framecast is a deterministic text-to-video frame synthesis engine.
//!
//! Given a short script and a target duration, Framecast produces a
//! time-ordered sequence of vector frames (SVG documents) showing a
//! word-by-word reveal of the script over an animated gradient background,
//! with decorative motion elements and a playback progress bar.
//!
//! # Pipeline overview
//!
//! 1. **Map**: `Timeline + FrameIndex -> progress in [0, 1]` (bounded by a
//!    frame cap regardless of the requested duration)
//! 2. **Compose**: `Composition + FrameIndex -> FrameDescriptor` (visible
//!    words, wrapped lines, opacity envelope, gradient hues, decoration)
//! 3. **Serialize**: `FrameDescriptor -> String` (self-contained SVG markup)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: every stage is a pure function of its
//!   input; identical inputs produce byte-identical frames.
//! - **No IO in the core**: text measurement is the only external
//!   collaborator and sits behind the [`TextMeasure`] trait.
//! - **Embarrassingly parallel**: frames have no ordering dependency; the
//!   pipeline offers an opt-in rayon-backed parallel mode with output
//!   identical to the sequential mode.
#![forbid(unsafe_code)]

mod composition;
mod eval;
mod foundation;
mod layout;
mod render;
mod script;
mod timeline;

pub use composition::dsl::CompositionBuilder;
pub use composition::model::{
    Composition, DecorStyle, GradientStyle, ProgressBarStyle, ShadowStyle, TextStyle,
};
pub use eval::composer::{Composer, FrameDescriptor};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point, Vec2};
pub use foundation::error::{FramecastError, FramecastResult};
pub use layout::measure::{FixedAdvanceMeasure, ParleyMeasure, TextMeasure};
pub use layout::wrap::{TextLine, layout_block, wrap_greedy};
pub use render::pipeline::{
    FrameSequence, RenderThreading, render_frame, render_frames, render_frames_with,
};
pub use render::svg::serialize_frame;
pub use script::library::{RandomSource, ScriptLibrary, SeededRandom, TemplateCategory};
pub use script::tokens::Script;
pub use timeline::mapper::Timeline;
