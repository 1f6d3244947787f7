// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.input.is_none() {
            self.input = config.input;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if self.format == "verbose" {
            if let Some(format) = config.format {
                self.format = format;
            }
        }
        if self.method == "divergence" {
            if let Some(method) = config.method {
                self.method = method;
            }
        }
        if self.model.is_none() {
            self.model = config.model;
        }

        // Alignment preprocessing
        if !self.strip_gaps && config.strip_gaps.unwrap_or(false) {
            self.strip_gaps = true;
        }
        if self.include_seqs.is_none() {
            self.include_seqs = config.include_seqs;
        }
        if self.exclude_seqs.is_none() {
            self.exclude_seqs = config.exclude_seqs;
        }

        // Flags
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
