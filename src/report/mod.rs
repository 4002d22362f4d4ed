//! Per-stage frame reports and the sinks that consume them.
//!
//! The pipeline hands every sink a [`FrameReport`] plus a borrow of the frame it describes, in
//! strict pipeline order: for each frame a `Generated` record, then a `Processed` record.

/// Line-oriented text and JSON sinks.
pub mod lines;
/// PNG dump of processed frames.
pub mod png;
/// Report record types and the sink trait.
pub mod sink;
