// validation.rs - Input validation utilities

use std::path::Path;
use std::str::FromStr;
use regex::Regex;
use crate::cli::args::Args;
use crate::core::DistanceMethod;
use crate::output::OutputFormat;

pub struct ValidationResult {
    pub method: DistanceMethod,
    pub format: OutputFormat,
    pub output_path: String,
    pub include_regex: Option<Regex>,
    pub exclude_regex: Option<Regex>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let input = args.input.as_ref().ok_or("--input is required")?;
    if !Path::new(input).is_file() {
        return Err(format!("the FASTA file can't be opened: {}", input));
    }

    let method = DistanceMethod::from_str(&args.method)?;
    let format = OutputFormat::from_str(&args.format)?;

    if args.model.is_some() && !method.needs_model() {
        println!(
            "⚠️  Warning: --model is ignored for method '{}'",
            method.description()
        );
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| format.default_file_name().to_string());

    // Compile regex patterns
    let include_regex = if let Some(pattern) = &args.include_seqs {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_seqs regex: {}", e))?)
    } else {
        None
    };

    let exclude_regex = if let Some(pattern) = &args.exclude_seqs {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_seqs regex: {}", e))?)
    } else {
        None
    };

    Ok(ValidationResult {
        method,
        format,
        output_path,
        include_regex,
        exclude_regex,
    })
}
