//! rtvid simulates a fixed-rate video pipeline.
//!
//! Every iteration synthesizes a single-channel 8-bit frame, applies one pixel transform in
//! place, and reports per-stage metadata plus the transform's elapsed time.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: [`FrameGenerator`] fills a fresh [`FrameBuffer`] with uniform random samples.
//! 2. **Report**: a `Generated` [`FrameReport`] goes to the [`ReportSink`].
//! 3. **Transform**: the run's [`Transform`] mutates the samples; the call is timed.
//! 4. **Report**: a `Processed` record carries the transform name and elapsed seconds.
//! 5. **Pace**: sleep `1 / fps` before the next frame.
//!
//! [`PipelineRunner`] drives the loop. It is single-threaded; a frame never outlives its
//! iteration.
#![forbid(unsafe_code)]

mod config;
mod foundation;
mod frame;
mod pipeline;
mod report;
mod transform;

pub use config::RunConfig;
pub use foundation::core::{
    DEFAULT_FPS, DEFAULT_FRAME_COUNT, DEFAULT_HEIGHT, DEFAULT_WIDTH, Fps, FrameDims, SequenceId,
    Timestamp,
};
pub use foundation::error::{RtvidError, RtvidResult};
pub use frame::buffer::FrameBuffer;
pub use frame::generator::FrameGenerator;
pub use pipeline::runner::{PipelineRunner, RunStats};
pub use report::lines::{JsonLinesSink, TextSink, format_text_line};
pub use report::png::PngDumpSink;
pub use report::sink::{FanoutSink, FrameReport, MemorySink, ReportSink, RunInfo, Stage};
pub use transform::engine::{Transform, adjust_brightness, invert, threshold};
pub use transform::menu::{
    DEFAULT_LEVEL, DELTA_RANGE, EffectChoice, LEVEL_RANGE, clamp_params, prompt_selection,
};
