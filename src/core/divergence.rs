// divergence.rs - Pairwise observed divergence between aligned sequences

use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};
use crate::core::pairs::{pair_count, pairs};
use crate::data::{SequenceStore, GAP};
use crate::error::{DistError, Result};

/// Returns true for gap and unknown-residue markers
#[inline]
pub fn is_gap_or_unknown(residue: u8) -> bool {
    matches!(residue, GAP | b'X' | b'x')
}

/// Site counts for one pair of aligned sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairCounts {
    pub substitutions: usize,
    pub indels: usize,
    pub length: usize,
}

impl PairCounts {
    /// Sites where neither residue is a gap or unknown
    pub fn comparable_sites(&self) -> usize {
        self.length - self.indels
    }

    /// Observed divergence p = substitutions / comparable sites, `None` if nothing is comparable
    pub fn divergence(&self) -> Option<f64> {
        match self.comparable_sites() {
            0 => None,
            sites => Some(self.substitutions as f64 / sites as f64),
        }
    }
}

/// Classify every aligned column of two sequences
pub fn compare_pair(seq_a: &[u8], seq_b: &[u8]) -> PairCounts {
    let length = seq_a.len().min(seq_b.len());
    let mut counts = PairCounts { length, ..PairCounts::default() };

    for (&a, &b) in seq_a.iter().zip(seq_b.iter()) {
        if is_gap_or_unknown(a) || is_gap_or_unknown(b) {
            counts.indels += 1;
        } else if a != b {
            counts.substitutions += 1;
        }
    }

    counts
}

/// Observed divergence for every pair, in canonical pair order
pub fn observed_divergences(store: &SequenceStore) -> Result<Vec<f64>> {
    observed_divergences_with_progress(store, &ProgressBar::hidden())
}

/// Same as [`observed_divergences`], reporting progress on `pb`
pub fn observed_divergences_with_progress(store: &SequenceStore, pb: &ProgressBar) -> Result<Vec<f64>> {
    let sequences = store.sequences();
    let mut divergences = Vec::with_capacity(pair_count(sequences.len()));

    for (i, j) in pairs(sequences.len()) {
        let counts = compare_pair(&sequences[i].residues, &sequences[j].residues);
        let p = counts
            .divergence()
            .ok_or(DistError::DivergenceUndefined { first: i, second: j })?;
        divergences.push(p);
        pb.inc(1);
    }

    Ok(divergences)
}

/// Compute observed divergences with a progress bar and timing report
pub fn compute_divergences(store: &SequenceStore) -> Result<Vec<f64>> {
    let n = store.len();
    let total_comparisons = pair_count(n);
    println!(
        "🔄 Computing observed divergences ({} sequences, {} comparisons)...",
        n, total_comparisons
    );

    let start = Instant::now();
    let pb = ProgressBar::new(total_comparisons as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec} ETA: {eta}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }

    let result = observed_divergences_with_progress(store, &pb);
    match &result {
        Ok(_) => pb.finish_with_message("✅ Divergences computed"),
        Err(_) => pb.abandon(),
    }

    let divergences = result?;
    println!("✅ Observed divergences computed in {:.2}s", start.elapsed().as_secs_f64());
    Ok(divergences)
}
