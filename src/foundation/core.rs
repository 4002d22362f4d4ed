use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::foundation::error::{RtvidError, RtvidResult};

/// Frame width used when no configuration overrides it.
pub const DEFAULT_WIDTH: u32 = 64;
/// Frame height used when no configuration overrides it.
pub const DEFAULT_HEIGHT: u32 = 64;
/// Number of frames driven through the pipeline by default.
pub const DEFAULT_FRAME_COUNT: u64 = 10;
/// Default pipeline cadence.
pub const DEFAULT_FPS: u32 = 30;

/// Per-run frame sequence number, assigned at generation time.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SequenceId(pub u64);

/// Raster dimensions shared by every frame of a run.
///
/// Width and height are always non-zero; the only way to build one is [`FrameDims::new`] or
/// [`FrameDims::DEFAULT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameDims {
    width: u32,
    height: u32,
}

impl FrameDims {
    /// 64x64, the fixed raster size of the simulated camera.
    pub const DEFAULT: FrameDims = FrameDims {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
    };

    /// Validate and build frame dimensions.
    pub fn new(width: u32, height: u32) -> RtvidResult<Self> {
        if width == 0 || height == 0 {
            return Err(RtvidError::validation("frame width/height must be non-zero"));
        }
        Ok(Self { width, height })
    }

    /// Frame width in samples.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Frame height in rows.
    pub fn height(self) -> u32 {
        self.height
    }

    /// Total sample count (`width * height`), or `None` if it does not fit in memory indices.
    pub fn sample_count(self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }
}

impl Default for FrameDims {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Rational frame rate driving the inter-frame delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames.
    pub num: u32,
    /// Per this many seconds; must be > 0.
    pub den: u32,
}

impl Fps {
    /// Validate and build a frame rate.
    pub fn new(num: u32, den: u32) -> RtvidResult<Self> {
        if den == 0 {
            return Err(RtvidError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(RtvidError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Cadence between two frames (`1 / fps`), truncated to whole nanoseconds.
    pub fn frame_interval(self) -> Duration {
        let nanos = 1_000_000_000u64 * u64::from(self.den) / u64::from(self.num);
        Duration::from_nanos(nanos)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self {
            num: DEFAULT_FPS,
            den: 1,
        }
    }
}

/// Wall-clock capture time split into whole seconds and nanoseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct Timestamp {
    /// Whole seconds.
    pub secs: u64,
    /// Sub-second part, always `< 1_000_000_000`.
    pub nanos: u32,
}

impl Timestamp {
    /// Read the current wall clock. A clock set before the epoch reads as zero.
    pub fn now() -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::from_duration(since_epoch)
    }

    /// Build from a duration since the epoch.
    pub fn from_duration(d: Duration) -> Self {
        Self {
            secs: d.as_secs(),
            nanos: d.subsec_nanos(),
        }
    }

    /// Seconds as a float (lossy).
    pub fn as_secs_f64(self) -> f64 {
        self.secs as f64 + f64::from(self.nanos) / 1e9
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:09}", self.secs, self.nanos)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
