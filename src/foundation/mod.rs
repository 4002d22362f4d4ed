/// Value types shared by every pipeline stage.
pub mod core;
/// Crate error taxonomy.
pub mod error;
