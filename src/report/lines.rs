use std::io::Write;

use crate::foundation::error::{RtvidError, RtvidResult};
use crate::frame::buffer::FrameBuffer;
use crate::pipeline::runner::RunStats;
use crate::report::sink::{FrameReport, ReportSink, Stage};

const SEPARATOR: &str = "------------------------------------------------------";

/// Human-readable console log, one line per record.
///
/// ```text
/// [Generated] Frame 00 | Time: 1700000000.000123456 | Pixel[0]= 17
/// [Processed] Frame 00 | Time: 1700000000.000123456 | Pixel[0]=238 | Effect: Invert     | ProcTime: 0.000004 s
/// ```
#[derive(Debug)]
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render one record without a trailing newline.
pub fn format_text_line(report: &FrameReport) -> String {
    let mut line = format!(
        "[{}] Frame {:02} | Time: {} | Pixel[0]={:3}",
        report.stage.as_str(),
        report.sequence_id.0,
        report.captured_at,
        report.sample0
    );
    if let Some(name) = report.transform_name {
        line.push_str(&format!(
            " | Effect: {:<10} | ProcTime: {:.6} s",
            name,
            report.elapsed_secs.unwrap_or(0.0)
        ));
    }
    line
}

impl<W: Write> ReportSink for TextSink<W> {
    fn report(&mut self, report: &FrameReport, _frame: &FrameBuffer) -> RtvidResult<()> {
        writeln!(self.out, "{}", format_text_line(report)).map_err(write_err)?;
        if report.stage == Stage::Processed {
            writeln!(self.out, "{SEPARATOR}").map_err(write_err)?;
        }
        Ok(())
    }

    fn end(&mut self, _stats: &RunStats) -> RtvidResult<()> {
        writeln!(self.out, "\nSimulation complete.").map_err(write_err)?;
        self.out.flush().map_err(write_err)
    }
}

/// Machine-readable log: one JSON object per record.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonLinesSink<W> {
    fn report(&mut self, report: &FrameReport, _frame: &FrameBuffer) -> RtvidResult<()> {
        serde_json::to_writer(&mut self.out, report).map_err(|e| match e.io_error_kind() {
            Some(kind) => write_err(kind.into()),
            None => RtvidError::serde(format!("encode report: {e}")),
        })?;
        self.out.write_all(b"\n").map_err(write_err)
    }

    fn end(&mut self, _stats: &RunStats) -> RtvidResult<()> {
        self.out.flush().map_err(write_err)
    }
}

fn write_err(e: std::io::Error) -> RtvidError {
    if e.kind() == std::io::ErrorKind::BrokenPipe {
        RtvidError::sink_closed(format!("write report: {e}"))
    } else {
        RtvidError::report(format!("write report: {e}"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/report/lines.rs"]
mod tests;
