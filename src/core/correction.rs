// correction.rs - Evolutionary distance corrections applied to observed divergence

use std::fmt;
use std::str::FromStr;
use crate::core::models::{resolve_model, SubstitutionModel, PC_BETA};
use crate::error::{DistError, Result};

/// Distance method selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMethod {
    /// Observed divergence, uncorrected
    Divergence,
    Poisson,
    /// Kimura's empirical estimate for the PAM model
    Kimura,
    JukesCantor,
    /// Gu-style estimator with model alpha and beta = 1
    PoissonCorrection,
    /// Gu-style estimator with model alpha and beta
    EqualInput,
}

impl FromStr for DistanceMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim_start_matches('-').to_lowercase().as_str() {
            "d" | "divergence" => Ok(DistanceMethod::Divergence),
            "p" | "poisson" => Ok(DistanceMethod::Poisson),
            "k" | "kimura" => Ok(DistanceMethod::Kimura),
            "jc" | "jukescantor" | "jukes-cantor" => Ok(DistanceMethod::JukesCantor),
            "pc" | "poissoncorrection" | "poisson-correction" => Ok(DistanceMethod::PoissonCorrection),
            "ei" | "equalinput" | "equal-input" => Ok(DistanceMethod::EqualInput),
            _ => Err(format!(
                "Invalid method: {}. Use: divergence, poisson, kimura, jukes-cantor, poisson-correction, equal-input",
                s
            )),
        }
    }
}

impl DistanceMethod {
    pub fn description(&self) -> &str {
        match self {
            DistanceMethod::Divergence => "Distance estimation",
            DistanceMethod::Poisson => "Poisson model for amino acids",
            DistanceMethod::Kimura => "Kimura estimation for PAM model",
            DistanceMethod::JukesCantor => "Jukes-Cantor model for amino acids",
            DistanceMethod::PoissonCorrection => "Poisson Correction",
            DistanceMethod::EqualInput => "Equal-Input",
        }
    }

    /// True for the methods parameterized by a substitution model
    pub fn needs_model(&self) -> bool {
        matches!(self, DistanceMethod::PoissonCorrection | DistanceMethod::EqualInput)
    }

    /// Resolve to a concrete correction. Unknown model names fall back to Dayhoff.
    pub fn correction(&self, model_name: Option<&str>) -> Correction {
        match self {
            DistanceMethod::Divergence => Correction::Identity,
            DistanceMethod::Poisson => Correction::Poisson,
            DistanceMethod::Kimura => Correction::Kimura,
            DistanceMethod::JukesCantor => Correction::JukesCantor,
            DistanceMethod::PoissonCorrection | DistanceMethod::EqualInput => {
                let (model, _) = resolve_model(model_name.unwrap_or_default());
                Correction::Gu(GuParams::for_method(*self, model))
            }
        }
    }
}

/// Alpha and beta of a Gu-style estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuParams {
    pub alpha: f64,
    pub beta: f64,
}

impl GuParams {
    pub fn poisson_correction(model: &SubstitutionModel) -> Self {
        Self { alpha: model.pc_alpha, beta: PC_BETA }
    }

    pub fn equal_input(model: &SubstitutionModel) -> Self {
        Self { alpha: model.ei_alpha, beta: model.ei_beta }
    }

    fn for_method(method: DistanceMethod, model: &SubstitutionModel) -> Self {
        if method == DistanceMethod::EqualInput {
            Self::equal_input(model)
        } else {
            Self::poisson_correction(model)
        }
    }
}

/// A stateless map from observed divergence p to evolutionary distance d
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Correction {
    /// d = p
    Identity,
    /// d = -ln(1 - p)
    Poisson,
    /// d = -ln(1 - p - 0.2 p²)
    Kimura,
    /// d = -(19/20) ln(1 - (20/19) p)
    JukesCantor,
    /// d = αβ((1 - p/β)^(-1/α) - 1)
    Gu(GuParams),
}

impl Correction {
    pub fn name(&self) -> &'static str {
        match self {
            Correction::Identity => "Distance estimation",
            Correction::Poisson => "Poisson",
            Correction::Kimura => "Kimura",
            Correction::JukesCantor => "Jukes-Cantor",
            Correction::Gu(_) => "Gu",
        }
    }

    /// Corrected distance, or `None` when p is outside the formula's domain
    pub fn apply(&self, p: f64) -> Option<f64> {
        let d = match *self {
            Correction::Identity => return Some(p),
            Correction::Poisson => ln_positive(1.0 - p).map(|l| -l)?,
            Correction::Kimura => ln_positive(1.0 - p - 0.2 * p * p).map(|l| -l)?,
            Correction::JukesCantor => ln_positive(1.0 - 20.0 * p / 19.0).map(|l| -19.0 / 20.0 * l)?,
            Correction::Gu(GuParams { alpha, beta }) => {
                let base = 1.0 - p / beta;
                if base <= 0.0 || alpha <= 0.0 {
                    return None;
                }
                alpha * beta * (base.powf(-1.0 / alpha) - 1.0)
            }
        };

        // -ln(1) is -0.0
        if d == 0.0 {
            Some(0.0)
        } else if d.is_finite() {
            Some(d)
        } else {
            None
        }
    }

    /// Apply element-wise, preserving order; the first out-of-domain value aborts
    pub fn apply_all(&self, divergences: &[f64]) -> Result<Vec<f64>> {
        divergences
            .iter()
            .enumerate()
            .map(|(index, &p)| {
                self.apply(p).ok_or(DistError::CorrectionDomain {
                    method: self.name(),
                    divergence: p,
                    index,
                })
            })
            .collect()
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correction::Gu(GuParams { alpha, beta }) => {
                write!(f, "Gu (alpha = {:.5}, beta = {:.5})", alpha, beta)
            }
            other => write!(f, "{}", other.name()),
        }
    }
}

fn ln_positive(x: f64) -> Option<f64> {
    (x > 0.0).then(|| x.ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{default_model, lookup_model};

    const EPS: f64 = 1e-9;

    fn all_corrections() -> Vec<Correction> {
        let jtt = lookup_model("JTT").unwrap();
        vec![
            Correction::Identity,
            Correction::Poisson,
            Correction::Kimura,
            Correction::JukesCantor,
            Correction::Gu(GuParams::poisson_correction(jtt)),
            Correction::Gu(GuParams::equal_input(jtt)),
        ]
    }

    #[test]
    fn test_zero_maps_to_zero() {
        for correction in all_corrections() {
            let d = correction.apply(0.0).unwrap();
            assert_eq!(d, 0.0, "{} should map 0 to 0", correction);
            assert!(d.is_sign_positive());
        }
    }

    #[test]
    fn test_poisson_value() {
        let d = Correction::Poisson.apply(0.25).unwrap();
        assert!((d - 0.287682).abs() < 1e-6);
        assert!((d - (-(0.75f64).ln())).abs() < EPS);
    }

    #[test]
    fn test_kimura_and_jukes_cantor_values() {
        let k = Correction::Kimura.apply(0.25).unwrap();
        assert!((k - (-(1.0f64 - 0.25 - 0.2 * 0.0625).ln())).abs() < EPS);

        let jc = Correction::JukesCantor.apply(0.25).unwrap();
        assert!((jc - (-19.0 / 20.0 * (1.0f64 - 20.0 * 0.25 / 19.0).ln())).abs() < EPS);
    }

    #[test]
    fn test_gu_value() {
        let params = GuParams { alpha: 2.0, beta: 1.0 };
        // 2 * ((0.75)^(-0.5) - 1)
        let expected = 2.0 * (1.0 / 0.75f64.sqrt() - 1.0);
        let d = Correction::Gu(params).apply(0.25).unwrap();
        assert!((d - expected).abs() < EPS);
    }

    #[test]
    fn test_monotonic_within_domain() {
        for correction in [Correction::Poisson, Correction::Kimura, Correction::JukesCantor] {
            let mut previous = correction.apply(0.0).unwrap();
            for step in 1..90 {
                let p = step as f64 / 100.0;
                let Some(d) = correction.apply(p) else { break };
                assert!(d > previous, "{} not increasing at p = {}", correction, p);
                previous = d;
            }
        }
    }

    #[test]
    fn test_domain_errors() {
        assert!(Correction::Poisson.apply(1.0).is_none());
        assert!(Correction::Kimura.apply(0.9).is_none()); // 1 - 0.9 - 0.162 < 0
        assert!(Correction::JukesCantor.apply(0.95).is_none());
        let ei = GuParams::equal_input(default_model());
        assert!(Correction::Gu(ei).apply(0.95).is_none()); // 0.95 > beta
        assert!(Correction::Identity.apply(1.0).is_some());
    }

    #[test]
    fn test_apply_all_reports_index() {
        let result = Correction::JukesCantor.apply_all(&[0.1, 0.2, 0.95, 0.3]);
        match result {
            Err(DistError::CorrectionDomain { method, divergence, index }) => {
                assert_eq!(method, "Jukes-Cantor");
                assert_eq!(divergence, 0.95);
                assert_eq!(index, 2);
            }
            other => panic!("Expected CorrectionDomain, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_all_preserves_order() {
        let input = [0.0, 0.25, 0.1, 0.25];
        let output = Correction::Poisson.apply_all(&input).unwrap();
        assert_eq!(output.len(), input.len());
        assert_eq!(output[0], 0.0);
        assert_eq!(output[1], output[3]);
        assert!(output[2] < output[1]);
        assert_eq!(Correction::Identity.apply_all(&input).unwrap(), input.to_vec());
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("-p".parse::<DistanceMethod>().unwrap(), DistanceMethod::Poisson);
        assert_eq!("--jukescantor".parse::<DistanceMethod>().unwrap(), DistanceMethod::JukesCantor);
        assert_eq!("Equal-Input".parse::<DistanceMethod>().unwrap(), DistanceMethod::EqualInput);
        assert_eq!("pc".parse::<DistanceMethod>().unwrap(), DistanceMethod::PoissonCorrection);
        assert!("nj".parse::<DistanceMethod>().is_err());
        assert!(DistanceMethod::EqualInput.needs_model());
        assert!(!DistanceMethod::Kimura.needs_model());
    }

    #[test]
    fn test_method_resolution() {
        assert_eq!(DistanceMethod::Divergence.correction(None), Correction::Identity);

        let pc = DistanceMethod::PoissonCorrection.correction(Some("foo"));
        assert_eq!(pc, Correction::Gu(GuParams { alpha: 1.99924, beta: 1.0 }));

        let ei = DistanceMethod::EqualInput.correction(Some("wag"));
        assert_eq!(ei, Correction::Gu(GuParams { alpha: 4.81653, beta: 0.94055 }));
    }
}
