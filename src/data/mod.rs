// mod.rs - Data structures module

pub mod sequence;

// Re-export main types for convenience
pub use sequence::{load_alignment, Sequence, SequenceStore, GAP, MIN_SEQUENCES};
