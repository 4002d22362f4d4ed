use std::time::{Duration, Instant};

use crate::frame::buffer::FrameBuffer;

/// The one pixel transform applied to every frame of a run.
///
/// Parameters are carried as wide signed integers and saturated when applied, so an
/// out-of-range `delta` or `level` can never push a sample outside `[0, 255]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transform {
    /// `s -> 255 - s`. Applying it twice restores the input.
    #[default]
    Invert,
    /// `s -> clamp(s + delta, 0, 255)`. Lossy once any sample saturates.
    BrightnessAdjust { delta: i32 },
    /// `s -> 255 if s > level else 0`, with `level` clamped to `[0, 255]`.
    Threshold { level: i32 },
}

impl Transform {
    /// Name shown in processed reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Invert => "Invert",
            Self::BrightnessAdjust { .. } => "Brightness",
            Self::Threshold { .. } => "Threshold",
        }
    }

    /// Apply to a frame in place.
    pub fn apply(self, frame: &mut FrameBuffer) {
        self.apply_to_samples(frame.samples_mut());
    }

    /// Apply in place and return the elapsed monotonic time of exactly this call.
    pub fn apply_timed(self, frame: &mut FrameBuffer) -> Duration {
        let start = Instant::now();
        self.apply(frame);
        start.elapsed()
    }

    /// Apply to a raw sample slice in place.
    pub fn apply_to_samples(self, samples: &mut [u8]) {
        match self {
            Self::Invert => invert(samples),
            Self::BrightnessAdjust { delta } => adjust_brightness(samples, delta),
            Self::Threshold { level } => threshold(samples, level),
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Invert => f.write_str("Invert"),
            Self::BrightnessAdjust { delta } => write!(f, "Brightness(delta={delta})"),
            Self::Threshold { level } => write!(f, "Threshold(level={level})"),
        }
    }
}

pub fn invert(samples: &mut [u8]) {
    for s in samples {
        *s = 255 - *s;
    }
}

pub fn adjust_brightness(samples: &mut [u8], delta: i32) {
    if delta == 0 {
        return;
    }
    for s in samples {
        let v = i32::from(*s).saturating_add(delta);
        *s = v.clamp(0, 255) as u8;
    }
}

/// Binarize around `level`. With `level >= 255` nothing passes, so every sample becomes 0.
pub fn threshold(samples: &mut [u8], level: i32) {
    let level = level.clamp(0, 255) as u8;
    for s in samples {
        *s = if *s > level { 255 } else { 0 };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/engine.rs"]
mod tests;
