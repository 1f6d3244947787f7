// mod.rs - Output formatters module

use std::fs::{create_dir_all, write};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use crate::core::{pairs, DistanceMatrix, Triangle};
use crate::data::SequenceStore;

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Count, upper triangle, labels and one line per pair
    Verbose,
    /// Count line and a full symmetric matrix with row labels
    Phylip,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('-').to_lowercase().as_str() {
            "verbose" | "o" | "output" | "seqs" => Ok(OutputFormat::Verbose),
            "phylip" | "m" | "matrice" | "matrix" => Ok(OutputFormat::Phylip),
            _ => Err(format!("Unsupported output format: {}. Use: verbose, phylip", s)),
        }
    }
}

impl OutputFormat {
    /// File written when no output path is given
    pub fn default_file_name(&self) -> &'static str {
        match self {
            OutputFormat::Verbose => "seqs.dist",
            OutputFormat::Phylip => "mat.dist",
        }
    }

    /// Lower-triangle policy this layout needs
    pub fn triangle(&self) -> Triangle {
        match self {
            OutputFormat::Verbose => Triangle::Upper,
            OutputFormat::Phylip => Triangle::Symmetric,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            OutputFormat::Verbose => "distance matrix with pairwise listing",
            OutputFormat::Phylip => "PHYLIP distance matrix",
        }
    }
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)
                .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
        }
    }
    Ok(())
}

/// Write the verbose layout
pub fn write_verbose<W: Write>(
    writer: &mut W,
    store: &SequenceStore,
    matrix: &DistanceMatrix,
    distances: &[f64],
    command_line: &str,
) -> io::Result<()> {
    let n = store.len();
    let labels = store.labels();

    writeln!(writer, "#distances order: d(1,2),...,d(1,n) <new line> d(2,3),...,d(2,n) <new line>...")?;
    writeln!(writer, "# Command: {}", command_line)?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(writer, "{}", n)?;

    for i in 0..n.saturating_sub(1) {
        for d in matrix.upper_row(i) {
            write!(writer, "{:.6} ", d)?;
        }
        writeln!(writer)?;
    }

    for label in &labels {
        write!(writer, "{} ", label)?;
    }
    writeln!(writer)?;
    writeln!(writer)?;

    writeln!(writer, "#pairwise distances")?;
    for ((i, j), d) in pairs(n).zip(distances) {
        writeln!(writer, "{},{}: {:.6}", labels[i], labels[j], d)?;
    }

    Ok(())
}

/// Write the PHYLIP layout; the matrix must be symmetric
pub fn write_phylip<W: Write>(writer: &mut W, store: &SequenceStore, matrix: &DistanceMatrix) -> io::Result<()> {
    writeln!(writer, "{}", store.len())?;

    for (label, row) in store.labels().iter().zip(matrix.rows()) {
        write!(writer, "{}", label)?;
        for d in row {
            write!(writer, "\t{:.6}", d)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Render a layout into memory
pub fn render(
    format: OutputFormat,
    store: &SequenceStore,
    matrix: &DistanceMatrix,
    distances: &[f64],
    command_line: &str,
) -> Result<Vec<u8>, String> {
    let mut buffer = Vec::new();
    let written = match format {
        OutputFormat::Verbose => write_verbose(&mut buffer, store, matrix, distances, command_line),
        OutputFormat::Phylip => write_phylip(&mut buffer, store, matrix),
    };
    written.map_err(|e| format!("Write error: {}", e))?;
    Ok(buffer)
}

/// Write distance matrix in the specified format.
/// The whole file is rendered before anything touches the disk.
pub fn write_matrix(
    file_path: &str,
    format: OutputFormat,
    store: &SequenceStore,
    matrix: &DistanceMatrix,
    distances: &[f64],
    command_line: &str,
) -> Result<(), String> {
    let content = render(format, store, matrix, distances, command_line)?;

    ensure_parent_dir(file_path)?;
    write(file_path, content)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;

    println!("✅ Distance matrix written to: {} ({})", file_path, format.description());
    Ok(())
}
