// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub output: Option<String>,
    pub format: Option<String>,

    // Distance settings
    pub method: Option<String>,
    pub model: Option<String>,

    // Alignment preprocessing
    pub strip_gaps: Option<bool>,
    pub include_seqs: Option<String>,
    pub exclude_seqs: Option<String>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# aadist.toml - Configuration file for aadist
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Aligned amino acid FASTA file
input = "/path/to/alignment.fasta"

# Output file (default: seqs.dist for verbose, mat.dist for phylip)
output = "distances.dist"

# Output format: verbose, phylip
format = "phylip"

# =============================================================================
# DISTANCE SETTINGS
# =============================================================================

# Method: divergence, poisson, kimura, jukes-cantor, poisson-correction, equal-input
method = "equal-input"

# Substitution model for poisson-correction and equal-input
# (AB, BLOSUM62, cpREV64, cpREV, Dayhoff, DCMut-Dayhoff, DCMut-JTT, DEN, FLU,
#  gcpREV, HIVb, HIVw, JTT, LG, mtART, mtInv, mtMAM, mtMet, mtREV, mtVer, mtZOA,
#  PMB, rtREV, stmtREV, VT, WAG, WAG*)
model = "JTT"

# =============================================================================
# ALIGNMENT PREPROCESSING
# =============================================================================

# Remove every alignment column that contains a gap
strip_gaps = false

# Include only sequences whose label matches regex pattern
# include_seqs = "^HUMAN_.*"

# Exclude sequences whose label matches regex pattern
# exclude_seqs = "partial"

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}
