use crate::{
    foundation::core::{Fps, FrameIndex, FrameRange},
    foundation::error::{FramecastError, FramecastResult},
};

#[derive(Clone, Copy, Debug)]
/// Maps wall-clock playback time onto a bounded, ordered frame index range.
///
/// `frame_count = min(ceil(duration_secs * fps), max_frames)`, always >= 1.
/// The cap bounds output size regardless of the requested duration.
pub struct Timeline {
    fps: Fps,
    duration_secs: f64,
    max_frames: u64,
}

impl Timeline {
    pub fn new(duration_secs: f64, fps: Fps, max_frames: u64) -> FramecastResult<Self> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(FramecastError::invalid_duration(
                "duration_secs must be finite and > 0",
            ));
        }
        if max_frames == 0 {
            return Err(FramecastError::validation("max_frames must be > 0"));
        }
        Ok(Self {
            fps,
            duration_secs,
            max_frames,
        })
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Uncapped frame count implied by the duration alone.
    pub fn nominal_frame_count(&self) -> u64 {
        self.fps.secs_to_frames_ceil(self.duration_secs)
    }

    /// Frame count actually generated, after the cap.
    pub fn frame_count(&self) -> u64 {
        self.nominal_frame_count().min(self.max_frames)
    }

    /// The full `[0, frame_count)` range.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.frame_count()),
        }
    }

    /// Ordered frame indices, `0..frame_count`.
    pub fn indices(&self) -> impl Iterator<Item = FrameIndex> + use<> {
        (0..self.frame_count()).map(FrameIndex)
    }

    /// Normalized playback position of `frame` in `[0, 1)`.
    ///
    /// Normalizes against the capped frame count. A single-frame timeline
    /// reports progress 0 for its only frame.
    pub fn progress(&self, frame: FrameIndex) -> f64 {
        let count = self.frame_count();
        if count <= 1 {
            return 0.0;
        }
        (frame.0 as f64) / (count as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/mapper.rs"]
mod tests;
