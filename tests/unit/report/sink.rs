use super::*;
use std::{cell::RefCell, rc::Rc};

fn frame(seq: u64, samples: Vec<u8>) -> FrameBuffer {
    let dims = FrameDims::new(samples.len() as u32, 1).unwrap();
    FrameBuffer::from_samples(
        SequenceId(seq),
        dims,
        samples,
        Timestamp::from_duration(std::time::Duration::new(5, 6)),
    )
    .unwrap()
}

fn info() -> RunInfo {
    RunInfo {
        dims: FrameDims::DEFAULT,
        frame_count: 1,
        fps: Fps::default(),
        transform: Transform::Invert,
        seed: 0,
    }
}

#[test]
fn generated_report_has_no_transform_fields() {
    let f = frame(2, vec![42, 1]);
    let r = FrameReport::generated(&f);
    assert_eq!(r.stage, Stage::Generated);
    assert_eq!(r.sequence_id, SequenceId(2));
    assert_eq!(r.sample0, 42);
    assert_eq!(r.transform_name, None);
    assert_eq!(r.elapsed_secs, None);
}

#[test]
fn processed_report_carries_name_and_elapsed() {
    let f = frame(0, vec![7]);
    let r = FrameReport::processed(&f, Transform::Threshold { level: 1 }, 0.25);
    assert_eq!(r.stage, Stage::Processed);
    assert_eq!(r.transform_name, Some("Threshold"));
    assert_eq!(r.elapsed_secs, Some(0.25));
    assert_eq!(r.captured_at, f.captured_at());
}

#[test]
fn report_json_omits_absent_fields() {
    let f = frame(1, vec![9]);
    let v = serde_json::to_value(FrameReport::generated(&f)).unwrap();
    assert_eq!(v["stage"], "Generated");
    assert_eq!(v["sequence_id"], 1);
    assert_eq!(v["captured_at"]["secs"], 5);
    assert_eq!(v["captured_at"]["nanos"], 6);
    assert!(v.get("transform_name").is_none());
    assert!(v.get("elapsed_secs").is_none());
}

#[test]
fn memory_sink_resets_on_begin() {
    let f = frame(0, vec![1]);
    let mut sink = MemorySink::new();
    sink.begin(&info()).unwrap();
    sink.report(&FrameReport::generated(&f), &f).unwrap();
    assert_eq!(sink.reports().len(), 1);
    sink.begin(&info()).unwrap();
    assert!(sink.reports().is_empty());
    assert_eq!(sink.info(), Some(info()));
}

#[derive(Default)]
struct Counting {
    begins: usize,
    reports: usize,
    ends: usize,
}

impl ReportSink for Rc<RefCell<Counting>> {
    fn begin(&mut self, _info: &RunInfo) -> RtvidResult<()> {
        self.borrow_mut().begins += 1;
        Ok(())
    }

    fn report(&mut self, _report: &FrameReport, _frame: &FrameBuffer) -> RtvidResult<()> {
        self.borrow_mut().reports += 1;
        Ok(())
    }

    fn end(&mut self, _stats: &RunStats) -> RtvidResult<()> {
        self.borrow_mut().ends += 1;
        Ok(())
    }
}


#[test]
fn fanout_forwards_to_every_sink() {
    let a = Rc::new(RefCell::new(Counting::default()));
    let b = Rc::new(RefCell::new(Counting::default()));
    let mut fan = FanoutSink::new();
    assert!(fan.is_empty());
    fan.push(a.clone());
    fan.push(b.clone());
    assert_eq!(fan.len(), 2);

    let f = frame(0, vec![1]);
    fan.begin(&info()).unwrap();
    fan.report(&FrameReport::generated(&f), &f).unwrap();
    fan.report(&FrameReport::processed(&f, Transform::Invert, 0.0), &f)
        .unwrap();
    fan.end(&RunStats::default()).unwrap();

    for c in [&a, &b] {
        let c = c.borrow();
        assert_eq!((c.begins, c.reports, c.ends), (1, 2, 1));
    }
}
