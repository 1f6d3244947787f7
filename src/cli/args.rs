// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug, Default)]
/// aadist - Evolutionary distance matrices from aligned amino acid sequences
pub struct Args {
    /// path to the aligned FASTA file
    #[argh(option, short = 'i')]
    pub input: Option<String>,

    /// distance method: divergence, poisson, kimura, jukes-cantor, poisson-correction, equal-input (default: divergence)
    #[argh(option, default = "String::from(\"divergence\")")]
    pub method: String,

    /// substitution model for poisson-correction and equal-input (prompted for when omitted)
    #[argh(option)]
    pub model: Option<String>,

    /// output format: verbose, phylip (default: verbose)
    #[argh(option, default = "String::from(\"verbose\")")]
    pub format: String,

    /// output file (default: seqs.dist for verbose, mat.dist for phylip)
    #[argh(option, short = 'o')]
    pub output: Option<String>,

    /// remove every alignment column that contains a gap before computing distances
    #[argh(switch)]
    pub strip_gaps: bool,

    /// include only sequences whose label matches regex pattern
    #[argh(option)]
    pub include_seqs: Option<String>,

    /// exclude sequences whose label matches regex pattern
    #[argh(option)]
    pub exclude_seqs: Option<String>,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// list the available substitution models and exit
    #[argh(switch)]
    pub list_models: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
