//! Pixel transforms and the selection front-end that picks one per run.

/// In-place sample transforms and their timing.
pub mod engine;
/// Menu/name parsing and the interactive selection prompt.
pub mod menu;
