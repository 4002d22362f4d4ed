use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::core::{
    DEFAULT_FPS, DEFAULT_FRAME_COUNT, DEFAULT_HEIGHT, DEFAULT_WIDTH, Fps, FrameDims,
};
use crate::foundation::error::{RtvidError, RtvidResult};
use crate::frame::generator::FrameGenerator;
use crate::pipeline::runner::PipelineRunner;
use crate::transform::engine::Transform;
use crate::transform::menu::clamp_params;

/// Everything fixed for the duration of one run.
///
/// Missing JSON fields take the defaults: 64x64, 10 frames, 30 fps, Invert, time-derived seed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub width: u32,
    pub height: u32,
    pub frame_count: u64,
    pub fps: u32,
    pub transform: Transform,
    /// Fixed RNG seed; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frame_count: DEFAULT_FRAME_COUNT,
            fps: DEFAULT_FPS,
            transform: Transform::Invert,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Load from a JSON file. Transform parameters are clamped into the menu ranges.
    pub fn from_json_path(path: &Path) -> RtvidResult<Self> {
        let f = File::open(path).map_err(|e| {
            RtvidError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        let mut cfg: RunConfig = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| RtvidError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.transform = clamp_params(cfg.transform);
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> RtvidResult<()> {
        self.dims()?;
        self.frame_rate()?;
        Ok(())
    }

    pub fn dims(&self) -> RtvidResult<FrameDims> {
        FrameDims::new(self.width, self.height)
    }

    pub fn frame_rate(&self) -> RtvidResult<Fps> {
        Fps::new(self.fps, 1)
    }

    /// Build a runner with a generator seeded per `seed`.
    pub fn build_runner(&self) -> RtvidResult<PipelineRunner> {
        let dims = self.dims()?;
        let generator = match self.seed {
            Some(seed) => FrameGenerator::with_seed(dims, seed),
            None => FrameGenerator::time_seeded(dims),
        };
        Ok(PipelineRunner::new(generator, self.frame_rate()?))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
