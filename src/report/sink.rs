use crate::foundation::core::{Fps, FrameDims, SequenceId, Timestamp};
use crate::foundation::error::RtvidResult;
use crate::frame::buffer::FrameBuffer;
use crate::pipeline::runner::RunStats;
use crate::transform::engine::Transform;

/// Pipeline stage a report describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Stage {
    Generated,
    Processed,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generated => "Generated",
            Self::Processed => "Processed",
        }
    }
}

/// One diagnostic record per frame per stage.
///
/// `transform_name` and `elapsed_secs` are present only on [`Stage::Processed`] records.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameReport {
    pub stage: Stage,
    pub sequence_id: SequenceId,
    pub captured_at: Timestamp,
    pub sample0: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_secs: Option<f64>,
}

impl FrameReport {
    /// Record for a freshly generated frame.
    pub fn generated(frame: &FrameBuffer) -> Self {
        Self {
            stage: Stage::Generated,
            sequence_id: frame.sequence_id(),
            captured_at: frame.captured_at(),
            sample0: frame.sample0(),
            transform_name: None,
            elapsed_secs: None,
        }
    }

    /// Record for a frame after `transform` ran on it in `elapsed_secs`.
    pub fn processed(frame: &FrameBuffer, transform: Transform, elapsed_secs: f64) -> Self {
        Self {
            stage: Stage::Processed,
            sequence_id: frame.sequence_id(),
            captured_at: frame.captured_at(),
            sample0: frame.sample0(),
            transform_name: Some(transform.name()),
            elapsed_secs: Some(elapsed_secs),
        }
    }
}

/// Fixed parameters of a run, announced to sinks before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RunInfo {
    pub dims: FrameDims,
    pub frame_count: u64,
    pub fps: Fps,
    pub transform: Transform,
    pub seed: u64,
}

/// Consumer of pipeline reports.
///
/// Ordering contract: `begin` once, then `report` in pipeline order, then `end` once after the
/// last frame. `end` is not called when the run aborts.
pub trait ReportSink {
    /// Called once before any frames are reported.
    fn begin(&mut self, _info: &RunInfo) -> RtvidResult<()> {
        Ok(())
    }

    /// Deliver one record. `frame` is the buffer the record describes, as it is at that stage.
    fn report(&mut self, report: &FrameReport, frame: &FrameBuffer) -> RtvidResult<()>;

    /// Called once after the last frame.
    fn end(&mut self, _stats: &RunStats) -> RtvidResult<()> {
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn begin(&mut self, info: &RunInfo) -> RtvidResult<()> {
        (**self).begin(info)
    }

    fn report(&mut self, report: &FrameReport, frame: &FrameBuffer) -> RtvidResult<()> {
        (**self).report(report, frame)
    }

    fn end(&mut self, stats: &RunStats) -> RtvidResult<()> {
        (**self).end(stats)
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn begin(&mut self, info: &RunInfo) -> RtvidResult<()> {
        (**self).begin(info)
    }

    fn report(&mut self, report: &FrameReport, frame: &FrameBuffer) -> RtvidResult<()> {
        (**self).report(report, frame)
    }

    fn end(&mut self, stats: &RunStats) -> RtvidResult<()> {
        (**self).end(stats)
    }
}

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySink {
    info: Option<RunInfo>,
    stats: Option<RunStats>,
    pub(crate) reports: Vec<FrameReport>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run parameters captured in `begin`, if any.
    pub fn info(&self) -> Option<RunInfo> {
        self.info
    }

    /// Stats captured in `end`, if the run completed.
    pub fn stats(&self) -> Option<RunStats> {
        self.stats
    }

    /// Records in arrival order.
    pub fn reports(&self) -> &[FrameReport] {
        &self.reports
    }
}

impl ReportSink for MemorySink {
    fn begin(&mut self, info: &RunInfo) -> RtvidResult<()> {
        self.info = Some(*info);
        self.stats = None;
        self.reports.clear();
        Ok(())
    }

    fn report(&mut self, report: &FrameReport, _frame: &FrameBuffer) -> RtvidResult<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn end(&mut self, stats: &RunStats) -> RtvidResult<()> {
        self.stats = Some(*stats);
        Ok(())
    }
}

/// Forwards every call to each inner sink in order; stops at the first error.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sink: impl ReportSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl ReportSink for FanoutSink {
    fn begin(&mut self, info: &RunInfo) -> RtvidResult<()> {
        self.sinks.iter_mut().try_for_each(|s| s.begin(info))
    }

    fn report(&mut self, report: &FrameReport, frame: &FrameBuffer) -> RtvidResult<()> {
        self.sinks.iter_mut().try_for_each(|s| s.report(report, frame))
    }

    fn end(&mut self, stats: &RunStats) -> RtvidResult<()> {
        self.sinks.iter_mut().try_for_each(|s| s.end(stats))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/report/sink.rs"]
mod tests;
