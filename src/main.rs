// main.rs - CLI entry point

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;
use aadist::cli::Config;
use aadist::core::{pair_at, MODELS};
use aadist::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    if args.list_models {
        list_models();
        return Ok(());
    }

    println!("🚀 aadist v{}", env!("CARGO_PKG_VERSION"));

    // Validate all arguments
    let validation_result = validate_args(&args)?;
    let input = args.input.as_deref().ok_or("--input is required")?;

    let total_start = Instant::now();

    // Load the alignment
    let mut store = load_alignment(Path::new(input)).map_err(|e| e.to_string())?;
    println!(
        "📊 Alignment: {} sequences × {} columns",
        store.len(),
        store.alignment_length()
    );

    if validation_result.include_regex.is_some() || validation_result.exclude_regex.is_some() {
        store = store
            .filter_labels(
                validation_result.include_regex.as_ref(),
                validation_result.exclude_regex.as_ref(),
            )
            .map_err(|e| e.to_string())?;
        println!("🔍 After label filters: {} sequences", store.len());
    }

    if args.strip_gaps {
        let before = store.alignment_length();
        store = store.strip_gap_columns().map_err(|e| e.to_string())?;
        println!(
            "✂️  Removed {} gapped columns ({} remaining)",
            before - store.alignment_length(),
            store.alignment_length()
        );
    }

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        println!(
            "📊 Final alignment: {} sequences × {} columns, {} pairs",
            store.len(),
            store.alignment_length(),
            aadist::core::pair_count(store.len())
        );
        return Ok(());
    }

    let method = validation_result.method;
    let model_name = if method.needs_model() {
        match args.model.clone() {
            Some(name) => Some(name),
            None => Some(prompt_model()?),
        }
    } else {
        None
    };

    let correction = method.correction(model_name.as_deref());
    println!("\n🎯 Method: {} ({})", method.description(), correction);

    let result = calculate_distances(&store, &correction, validation_result.format.triangle())
        .map_err(|e| describe_failure(&e, &store))?;

    write_matrix(
        &validation_result.output_path,
        validation_result.format,
        &store,
        &result.matrix,
        &result.distances,
        &command_line,
    )?;

    let total_elapsed = total_start.elapsed();
    println!(
        "\n🎉 Analysis completed in {:.2}s",
        total_elapsed.as_secs_f64()
    );

    Ok(())
}

/// Ask for a substitution model on stdin
fn prompt_model() -> Result<String, String> {
    print!("Please enter the amino acids substitution model: ");
    io::stdout().flush().map_err(|e| format!("Failed to write prompt: {}", e))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read model name: {}", e))?;
    Ok(line.trim().to_string())
}

/// Name the offending pair when a distance could not be computed
fn describe_failure(error: &DistError, store: &SequenceStore) -> String {
    let labels = store.labels();
    match error {
        DistError::CorrectionDomain { index, .. } => match pair_at(*index, store.len()) {
            Some((i, j)) => format!("{} [{} vs {}]", error, labels[i], labels[j]),
            None => error.to_string(),
        },
        DistError::DivergenceUndefined { first, second } => {
            format!("{} [{} vs {}]", error, labels[*first], labels[*second])
        }
        _ => error.to_string(),
    }
}

fn list_models() {
    println!("🧬 Substitution models ({}):", MODELS.len());
    println!(
        "  {:<16} {:>10} {:>10} {:>10}",
        "name", "PC alpha", "EI alpha", "EI beta"
    );
    for model in MODELS.iter() {
        println!(
            "  {:<16} {:>10.5} {:>10.5} {:>10.5}",
            model.name, model.pc_alpha, model.ei_alpha, model.ei_beta
        );
    }
}
