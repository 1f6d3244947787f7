// sequence.rs - Sequence store for aligned amino acid FASTA files

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use bio::io::fasta;
use regex::Regex;
use crate::error::{DistError, Result};

/// Minimum number of sequences needed to build a distance matrix
pub const MIN_SEQUENCES: usize = 3;

/// Gap character in aligned sequences
pub const GAP: u8 = b'-';

/// One aligned sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    pub header: String,
    pub index: usize,
    pub residues: Vec<u8>,
}

impl Sequence {
    pub fn new(header: impl Into<String>, index: usize, residues: impl Into<Vec<u8>>) -> Self {
        Self {
            header: header.into(),
            index,
            residues: residues.into(),
        }
    }

    /// First whitespace-delimited token of the header, used as the taxon label
    pub fn label(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }
}

/// Ordered collection of equal-length aligned sequences
#[derive(Debug, Clone)]
pub struct SequenceStore {
    sequences: Vec<Sequence>,
    alignment_length: usize,
}

impl SequenceStore {
    /// Build a store, checking the sequence count and that all sequences are aligned.
    /// Sequence indices are reassigned to match their position.
    pub fn new(sequences: Vec<Sequence>) -> Result<Self> {
        if sequences.len() < MIN_SEQUENCES {
            return Err(DistError::TooFewSequences { found: sequences.len() });
        }

        let alignment_length = sequences[0].residues.len();
        if let Some(bad) = sequences.iter().find(|s| s.residues.len() != alignment_length) {
            return Err(DistError::NotAligned {
                header: bad.header.clone(),
                expected: alignment_length,
                found: bad.residues.len(),
            });
        }

        let sequences = sequences
            .into_iter()
            .enumerate()
            .map(|(index, seq)| Sequence { index, ..seq })
            .collect();

        Ok(Self { sequences, alignment_length })
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Number of aligned columns
    pub fn alignment_length(&self) -> usize {
        self.alignment_length
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn get(&self, index: usize) -> Option<&Sequence> {
        self.sequences.get(index)
    }

    /// Taxon labels in store order
    pub fn labels(&self) -> Vec<&str> {
        self.sequences.iter().map(|s| s.label()).collect()
    }

    /// Remove every column where at least one sequence has a gap.
    ///
    /// Only `-` marks a removable column; unknown residues (`X`) are kept and are
    /// handled later by the divergence engine.
    pub fn strip_gap_columns(&self) -> Result<Self> {
        let gap_columns: HashSet<usize> = self
            .sequences
            .iter()
            .flat_map(|seq| {
                seq.residues
                    .iter()
                    .enumerate()
                    .filter(|(_, &r)| r == GAP)
                    .map(|(col, _)| col)
            })
            .collect();

        let stripped = self
            .sequences
            .iter()
            .map(|seq| Sequence {
                header: seq.header.clone(),
                index: seq.index,
                residues: seq
                    .residues
                    .iter()
                    .enumerate()
                    .filter(|(col, _)| !gap_columns.contains(col))
                    .map(|(_, &r)| r)
                    .collect(),
            })
            .collect();

        Self::new(stripped)
    }

    /// Keep only sequences whose label matches `include` and does not match `exclude`
    pub fn filter_labels(&self, include: Option<&Regex>, exclude: Option<&Regex>) -> Result<Self> {
        let kept: Vec<Sequence> = self
            .sequences
            .iter()
            .filter(|seq| include.map_or(true, |re| re.is_match(seq.label())))
            .filter(|seq| exclude.map_or(true, |re| !re.is_match(seq.label())))
            .cloned()
            .collect();

        Self::new(kept)
    }
}

/// Load an aligned FASTA file into a sequence store
pub fn load_alignment(path: &Path) -> Result<SequenceStore> {
    let file = File::open(path).map_err(|_| DistError::FileNotFound {
        path: path.to_path_buf(),
    })?;

    let reader = fasta::Reader::new(BufReader::new(file));
    let mut sequences = Vec::new();

    for (index, record_result) in reader.records().enumerate() {
        let record = record_result.map_err(|e| DistError::InvalidFasta {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let header = match record.desc() {
            Some(desc) => format!("{} {}", record.id(), desc),
            None => record.id().to_string(),
        };
        sequences.push(Sequence::new(header, index, record.seq().to_vec()));
    }

    SequenceStore::new(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_fasta(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("aadist_{}_{}.fasta", name, std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_alignment() {
        let path = write_temp_fasta(
            "load",
            ">seq1 first protein\nMKV-\n>seq2\nMKIA\n>seq3 third\nMR\nIA\n",
        );
        let store = load_alignment(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.alignment_length(), 4);
        assert_eq!(store.get(0).unwrap().header, "seq1 first protein");
        assert_eq!(store.get(2).unwrap().residues, b"MRIA".to_vec());
        assert_eq!(store.labels(), vec!["seq1", "seq2", "seq3"]);
    }

    #[test]
    fn test_missing_file() {
        let result = load_alignment(Path::new("/nonexistent/aadist/input.fasta"));
        assert!(matches!(result, Err(DistError::FileNotFound { .. })));
    }

    #[test]
    fn test_unaligned_sequences() {
        let path = write_temp_fasta("unaligned", ">a\nMKV\n>b\nMKVA\n>c\nMKV\n");
        let result = load_alignment(&path);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(DistError::NotAligned { header, expected, found }) => {
                assert_eq!(header, "b");
                assert_eq!(expected, 3);
                assert_eq!(found, 4);
            }
            other => panic!("Expected NotAligned, got {:?}", other),
        }
    }

    #[test]
    fn test_too_few_sequences() {
        let path = write_temp_fasta("few", ">a\nMKV\n>b\nMKV\n");
        let result = load_alignment(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DistError::TooFewSequences { found: 2 })));
    }

    #[test]
    fn test_strip_gap_columns() {
        let store = SequenceStore::new(vec![
            Sequence::new("a", 0, "A-CDX"),
            Sequence::new("b", 1, "AB-DX"),
            Sequence::new("c", 2, "ABCD-"),
        ])
        .unwrap();

        let stripped = store.strip_gap_columns().unwrap();
        assert_eq!(stripped.alignment_length(), 2);
        assert_eq!(stripped.get(0).unwrap().residues, b"AD".to_vec());
        assert_eq!(stripped.get(1).unwrap().residues, b"AD".to_vec());
        assert_eq!(stripped.get(2).unwrap().residues, b"AD".to_vec());
        // Original store is untouched
        assert_eq!(store.alignment_length(), 5);
    }

    #[test]
    fn test_filter_labels() {
        let store = SequenceStore::new(vec![
            Sequence::new("human_1 desc", 0, "AAAA"),
            Sequence::new("mouse_1", 1, "AAAB"),
            Sequence::new("human_2", 2, "AABB"),
            Sequence::new("human_3", 3, "ABBB"),
        ])
        .unwrap();

        let include = Regex::new("^human").unwrap();
        let filtered = store.filter_labels(Some(&include), None).unwrap();
        assert_eq!(filtered.labels(), vec!["human_1", "human_2", "human_3"]);
        assert_eq!(filtered.get(2).unwrap().index, 2);

        let exclude = Regex::new("_3$").unwrap();
        let result = filtered.filter_labels(None, Some(&exclude));
        assert!(matches!(result, Err(DistError::TooFewSequences { found: 2 })));
    }
}
