// error.rs - Error taxonomy shared by the data and core layers

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an alignment or computing its distance matrix
#[derive(Error, Debug)]
pub enum DistError {
    /// The FASTA path does not exist or cannot be opened
    #[error("the FASTA file can't be opened: {path}")]
    FileNotFound { path: PathBuf },

    /// The file exists but is not readable FASTA
    #[error("invalid FASTA record in {path}: {message}")]
    InvalidFasta { path: PathBuf, message: String },

    /// Fewer than three sequences survived loading and filtering
    #[error("the number of sequences must be at least 3 to build a distance matrix (found {found})")]
    TooFewSequences { found: usize },

    /// Sequences of unequal length
    #[error("amino acid sequences are not aligned: '{header}' has length {found}, expected {expected}")]
    NotAligned {
        header: String,
        expected: usize,
        found: usize,
    },

    /// A pair has no site where both residues are known
    #[error("divergence undefined between sequences {first} and {second}: no comparable sites")]
    DivergenceUndefined { first: usize, second: usize },

    /// Observed divergence outside the valid range of a correction formula
    #[error("{method} correction undefined for divergence {divergence:.6} (pair #{index})")]
    CorrectionDomain {
        method: &'static str,
        divergence: f64,
        index: usize,
    },

    /// Flat distance list does not match N·(N−1)/2
    #[error("expected {expected} pairwise distances for {sequences} sequences, got {found}")]
    SizeMismatch {
        sequences: usize,
        expected: usize,
        found: usize,
    },

    /// Model name not present in the substitution model table
    #[error("unknown substitution model '{name}'")]
    UnknownSubstitutionModel { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using DistError
pub type Result<T> = std::result::Result<T, DistError>;
