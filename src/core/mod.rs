// mod.rs - Core logic module

pub mod correction;
pub mod divergence;
pub mod matrix;
pub mod models;
pub mod pairs;
pub mod pipeline;

// Re-export main types for convenience
pub use correction::{Correction, DistanceMethod, GuParams};
pub use divergence::{compare_pair, observed_divergences, PairCounts};
pub use matrix::{DistanceMatrix, Triangle};
pub use models::{lookup_model, resolve_model, SubstitutionModel, MODELS};
pub use pairs::{pair_at, pair_count, pairs};
pub use pipeline::{calculate_distances, DistanceResult};
