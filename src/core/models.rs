// models.rs - Amino acid substitution model parameters for Gu-style corrections

use crate::error::{DistError, Result};

/// Alpha/beta parameters of one empirical substitution model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstitutionModel {
    /// Display name
    pub name: &'static str,
    /// Normalized lookup key (see [`normalize_model_name`])
    key: &'static str,
    /// Alpha of the Poisson-Correction estimator (beta fixed at 1)
    pub pc_alpha: f64,
    /// Alpha of the Equal-Input estimator
    pub ei_alpha: f64,
    /// Beta of the Equal-Input estimator
    pub ei_beta: f64,
}

/// Fallback model for unrecognized names
pub const DEFAULT_MODEL: &str = "Dayhoff";

/// Poisson-Correction beta
pub const PC_BETA: f64 = 1.0;

const fn model(name: &'static str, key: &'static str, pc_alpha: f64, ei_alpha: f64, ei_beta: f64) -> SubstitutionModel {
    SubstitutionModel { name, key, pc_alpha, ei_alpha, ei_beta }
}

/// The 27 supported models
pub static MODELS: [SubstitutionModel; 27] = [
    model("AB", "ab", 1.71521, 2.78549, 0.93407),
    model("BLOSUM62", "blosum62", 3.24334, 6.32690, 0.94151),
    model("cpREV64", "cprev64", 2.63503, 4.64357, 0.93948),
    model("cpREV", "cprev", 1.98628, 3.14971, 0.93916),
    model("Dayhoff", "dayhoff", 1.99924, 3.14582, 0.93993),
    model("DCMut-Dayhoff", "dcmutdayhoff", 2.01070, 3.16983, 0.93993),
    model("DCMut-JTT", "dcmutjtt", 2.55191, 4.36663, 0.94193),
    model("DEN", "den", 2.12834, 3.34672, 0.94143),
    model("FLU", "flu", 1.52820, 2.22717, 0.94110),
    model("gcpREV", "gcprev", 1.76147, 2.72778, 0.93745),
    model("HIVb", "hivb", 1.83588, 2.77572, 0.94179),
    model("HIVw", "hivw", 1.62839, 2.45611, 0.93819),
    model("JTT", "jtt", 2.57163, 4.39688, 0.94191),
    model("LG", "lg", 2.21046, 3.56820, 0.94051),
    model("mtART", "mtart", 0.93628, 1.35206, 0.92743),
    model("mtInv", "mtinv", 1.57997, 2.85866, 0.92211),
    model("mtMAM", "mtmam", 0.90348, 1.30527, 0.92473),
    model("mtMet", "mtmet", 1.40469, 2.34419, 0.92546),
    model("mtREV", "mtrev", 1.23867, 1.95601, 0.92467),
    model("mtVer", "mtver", 1.15596, 1.91274, 0.92052),
    model("mtZOA", "mtzoa", 1.05466, 1.57251, 0.92686),
    model("PMB", "pmb", 3.45924, 7.10575, 0.94195),
    model("rtREV", "rtrev", 2.08011, 3.30578, 0.94024),
    model("stmtREV", "stmtrev", 2.03813, 3.77358, 0.92778),
    model("VT", "vt", 3.41801, 6.96847, 0.94092),
    model("WAG", "wag", 2.69788, 4.81653, 0.94055),
    model("WAG*", "wag*", 2.80430, 5.01598, 0.94055),
];

/// Case-fold and drop punctuation so "DCMut-JTT", "dcmutjtt" and "DCMUT_JTT" agree.
/// `*` is kept and a trailing "star" is read as `*` ("WAGstar" == "WAG*").
pub fn normalize_model_name(name: &str) -> String {
    let folded: String = name
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '*')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match folded.strip_suffix("star") {
        Some(stem) if !stem.is_empty() => format!("{}*", stem),
        _ => folded,
    }
}

/// Look up a model by name
pub fn lookup_model(name: &str) -> Result<&'static SubstitutionModel> {
    let key = normalize_model_name(name);
    MODELS
        .iter()
        .find(|m| m.key == key)
        .ok_or_else(|| DistError::UnknownSubstitutionModel { name: name.to_string() })
}

/// The model used when a lookup fails
pub fn default_model() -> &'static SubstitutionModel {
    &MODELS[4]
}

/// Look up a model, falling back to Dayhoff with a visible warning.
/// The returned flag is true when the fallback was used.
pub fn resolve_model(name: &str) -> (&'static SubstitutionModel, bool) {
    match lookup_model(name) {
        Ok(model) => (model, false),
        Err(e) => {
            eprintln!("⚠️  Warning: {}; using default model {}", e, DEFAULT_MODEL);
            (default_model(), true)
        }
    }
}
