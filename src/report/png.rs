use std::path::{Path, PathBuf};

use crate::foundation::error::{RtvidError, RtvidResult};
use crate::frame::buffer::FrameBuffer;
use crate::report::sink::{FrameReport, ReportSink, RunInfo, Stage};

/// Writes every processed frame to `<dir>/frame_<seq>.png` as 8-bit grayscale.
#[derive(Debug)]
pub struct PngDumpSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngDumpSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn frame_path(&self, seq: u64) -> PathBuf {
        self.dir.join(format!("frame_{seq:04}.png"))
    }
}

impl ReportSink for PngDumpSink {
    fn begin(&mut self, _info: &RunInfo) -> RtvidResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            RtvidError::report(format!("create dump dir '{}': {e}", self.dir.display()))
        })?;
        self.written.clear();
        Ok(())
    }

    fn report(&mut self, report: &FrameReport, frame: &FrameBuffer) -> RtvidResult<()> {
        if report.stage != Stage::Processed {
            return Ok(());
        }
        let path = self.frame_path(report.sequence_id.0);
        image::save_buffer_with_format(
            &path,
            frame.samples(),
            frame.width(),
            frame.height(),
            image::ColorType::L8,
            image::ImageFormat::Png,
        )
        .map_err(|e| RtvidError::report(format!("write png '{}': {e}", path.display())))?;
        tracing::trace!(path = %path.display(), "frame dumped");
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/report/png.rs"]
mod tests;
