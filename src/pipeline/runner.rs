use std::time::Duration;

use crate::foundation::core::{Fps, SequenceId};
use crate::foundation::error::RtvidResult;
use crate::frame::generator::FrameGenerator;
use crate::report::sink::{FrameReport, ReportSink, RunInfo};
use crate::transform::engine::Transform;

/// Aggregate timing over a completed run. Diagnostic only.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct RunStats {
    pub frames_generated: u64,
    pub frames_processed: u64,
    /// Sum of per-frame transform times, in seconds.
    pub total_transform_secs: f64,
    /// Slowest single transform call, in seconds.
    pub max_transform_secs: f64,
}

impl RunStats {
    /// Mean transform time, or 0 when nothing was processed.
    pub fn mean_transform_secs(&self) -> f64 {
        if self.frames_processed == 0 {
            0.0
        } else {
            self.total_transform_secs / self.frames_processed as f64
        }
    }

    fn record_transform(&mut self, elapsed: Duration) {
        let secs = elapsed.as_secs_f64();
        self.frames_processed += 1;
        self.total_transform_secs += secs;
        self.max_transform_secs = self.max_transform_secs.max(secs);
    }
}

/// Drives frames through generate -> report -> transform -> report at a fixed cadence.
///
/// Strictly sequential. Each frame is owned by a single loop iteration and dropped at its end.
/// The inter-frame delay is a plain sleep: overruns are absorbed, never detected.
#[derive(Debug)]
pub struct PipelineRunner {
    generator: FrameGenerator,
    fps: Fps,
}

impl PipelineRunner {
    pub fn new(generator: FrameGenerator, fps: Fps) -> Self {
        Self { generator, fps }
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn generator(&self) -> &FrameGenerator {
        &self.generator
    }

    /// Run `frame_count` iterations with sequence ids `0..frame_count`.
    ///
    /// Aborts on the first error (allocation failure or a failing sink) without calling
    /// [`ReportSink::end`]; frames already reported stay reported.
    #[tracing::instrument(skip(self, sink), fields(fps = self.fps.as_f64()))]
    pub fn run<S: ReportSink + ?Sized>(
        &mut self,
        frame_count: u64,
        transform: Transform,
        sink: &mut S,
    ) -> RtvidResult<RunStats> {
        let info = RunInfo {
            dims: self.generator.dims(),
            frame_count,
            fps: self.fps,
            transform,
            seed: self.generator.seed(),
        };
        tracing::info!(
            width = info.dims.width(),
            height = info.dims.height(),
            frame_count,
            %transform,
            seed = info.seed,
            "pipeline start"
        );
        sink.begin(&info)?;

        let cadence = self.fps.frame_interval();
        let mut stats = RunStats::default();

        for i in 0..frame_count {
            let mut frame = self.generator.generate(SequenceId(i))?;
            stats.frames_generated += 1;
            sink.report(&FrameReport::generated(&frame), &frame)?;

            let elapsed = transform.apply_timed(&mut frame);
            stats.record_transform(elapsed);
            tracing::debug!(
                seq = i,
                sample0 = frame.sample0(),
                elapsed_us = elapsed.as_micros() as u64,
                "frame processed"
            );
            sink.report(
                &FrameReport::processed(&frame, transform, elapsed.as_secs_f64()),
                &frame,
            )?;

            drop(frame);
            std::thread::sleep(cadence);
        }

        sink.end(&stats)?;
        tracing::info!(
            frames = stats.frames_processed,
            mean_transform_secs = stats.mean_transform_secs(),
            max_transform_secs = stats.max_transform_secs,
            "pipeline complete"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/runner.rs"]
mod tests;
