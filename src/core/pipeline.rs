// pipeline.rs - Divergence → correction → matrix

use crate::core::correction::Correction;
use crate::core::divergence::compute_divergences;
use crate::core::matrix::{DistanceMatrix, Triangle};
use crate::data::SequenceStore;
use crate::error::Result;

/// Corrected pairwise distances, flat and assembled
#[derive(Debug, Clone)]
pub struct DistanceResult {
    /// Distances in canonical pair order
    pub distances: Vec<f64>,
    pub matrix: DistanceMatrix,
}

/// Run the whole computation for one alignment.
/// Nothing is returned unless every pair produced a valid distance.
pub fn calculate_distances(store: &SequenceStore, correction: &Correction, triangle: Triangle) -> Result<DistanceResult> {
    let divergences = compute_divergences(store)?;
    let distances = correction.apply_all(&divergences)?;
    let matrix = DistanceMatrix::assemble(&distances, store.len(), triangle)?;
    Ok(DistanceResult { distances, matrix })
}
