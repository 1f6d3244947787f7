// matrix.rs - Assembly of flat pairwise distances into an N×N matrix

use crate::core::pairs::{pair_count, pairs};
use crate::error::{DistError, Result};

/// How the lower triangle is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Triangle {
    /// Lower triangle left at zero
    Upper,
    /// Lower triangle mirrored from the upper one
    Symmetric,
}

/// Square matrix of pairwise distances, diagonal zero
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Lay out `distances` (canonical pair order) as an `n`×`n` matrix
    pub fn assemble(distances: &[f64], n: usize, triangle: Triangle) -> Result<Self> {
        let expected = pair_count(n);
        if distances.len() != expected {
            return Err(DistError::SizeMismatch {
                sequences: n,
                expected,
                found: distances.len(),
            });
        }

        let mut values = vec![0.0; n * n];
        for ((i, j), &d) in pairs(n).zip(distances) {
            values[i * n + j] = d;
            if triangle == Triangle::Symmetric {
                values[j * n + i] = d;
            }
        }

        Ok(Self { size: n, values })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.size.max(1))
    }

    /// Upper-triangle entries of row `i` (columns `i+1..n`)
    pub fn upper_row(&self, i: usize) -> &[f64] {
        &self.row(i)[i + 1..]
    }

    /// Read the upper triangle back in canonical pair order
    pub fn flatten(&self) -> Vec<f64> {
        pairs(self.size).map(|(i, j)| self.get(i, j)).collect()
    }

    pub fn is_symmetric(&self) -> bool {
        pairs(self.size).all(|(i, j)| self.get(i, j) == self.get(j, i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_upper() {
        let m = DistanceMatrix::assemble(&[0.1, 0.2, 0.3], 3, Triangle::Upper).unwrap();
        assert_eq!(m.row(0), &[0.0, 0.1, 0.2]);
        assert_eq!(m.row(1), &[0.0, 0.0, 0.3]);
        assert_eq!(m.row(2), &[0.0, 0.0, 0.0]);
        assert_eq!(m.upper_row(0), &[0.1, 0.2]);
        assert!(m.upper_row(2).is_empty());
    }

    #[test]
    fn test_assemble_symmetric() {
        let distances: Vec<f64> = (1..=10).map(|x| x as f64 / 10.0).collect();
        let m = DistanceMatrix::assemble(&distances, 5, Triangle::Symmetric).unwrap();
        assert!(m.is_symmetric());
        for i in 0..5 {
            assert_eq!(m.get(i, i), 0.0);
        }
        assert_eq!(m.get(3, 1), m.get(1, 3));
        assert_eq!(m.rows().count(), 5);
    }

    #[test]
    fn test_round_trip() {
        for n in 3..10 {
            let distances: Vec<f64> = (0..pair_count(n)).map(|k| k as f64 * 0.013 + 0.001).collect();
            for triangle in [Triangle::Upper, Triangle::Symmetric] {
                let m = DistanceMatrix::assemble(&distances, n, triangle).unwrap();
                assert_eq!(m.flatten(), distances);
            }
        }
    }

    #[test]
    fn test_cell_matches_pair_index() {
        // Value k lands on the k-th enumerated pair
        let n = 6;
        let distances: Vec<f64> = (0..pair_count(n)).map(|k| k as f64).collect();
        let m = DistanceMatrix::assemble(&distances, n, Triangle::Upper).unwrap();
        for (k, (i, j)) in pairs(n).enumerate() {
            assert_eq!(m.get(i, j), k as f64);
        }
    }

    #[test]
    fn test_size_mismatch() {
        let result = DistanceMatrix::assemble(&[0.1, 0.2], 3, Triangle::Symmetric);
        match result {
            Err(DistError::SizeMismatch { sequences, expected, found }) => {
                assert_eq!((sequences, expected, found), (3, 3, 2));
            }
            other => panic!("Expected SizeMismatch, got {:?}", other),
        }
        assert!(DistanceMatrix::assemble(&[0.1; 4], 3, Triangle::Upper).is_err());
    }
}
