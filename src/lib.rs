// lib.rs - aadist library root

//! # aadist - Evolutionary distance matrices for aligned amino acid sequences
//!
//! Computes pairwise observed divergence from a multiple sequence alignment,
//! optionally corrects it with one of several evolutionary models, and lays
//! the result out as a distance matrix.
//!
//! ## Features
//!
//! - **Five methods**: distance estimation, Poisson, Kimura (PAM), Jukes-Cantor,
//!   and Gu-style Poisson Correction / Equal-Input estimators
//! - **27 substitution models** for the Gu-style estimators (Dayhoff, JTT, WAG, LG, ...)
//! - **Two layouts**: verbose listing and PHYLIP square matrix
//! - **Explicit failures**: undefined divergences and out-of-range corrections abort
//!   instead of producing NaN
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use aadist::prelude::*;
//!
//! let store = load_alignment(std::path::Path::new("aligned.fasta"))?;
//! let correction = DistanceMethod::EqualInput.correction(Some("JTT"));
//! let result = calculate_distances(&store, &correction, Triangle::Symmetric)?;
//! println!("d(0,1) = {:.6}", result.matrix.get(0, 1));
//! # Ok::<(), aadist::DistError>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{calculate_distances, observed_divergences, pairs, DistanceResult};
    pub use crate::core::{Correction, DistanceMatrix, DistanceMethod, GuParams, Triangle};
    pub use crate::data::{load_alignment, Sequence, SequenceStore};
    pub use crate::error::DistError;
    pub use crate::output::{write_matrix, OutputFormat};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use core::{Correction, DistanceMatrix, DistanceMethod};
pub use data::{Sequence, SequenceStore};
pub use error::{DistError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "aadist v{} - Evolutionary distances for aligned amino acid sequences",
        VERSION
    )
}
