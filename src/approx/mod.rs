//! Minimax approximation of two-band step targets.

use std::fmt;

use strum_macros::Display;

use crate::utils::linalg::SingularMatrix;

mod extrema;
mod interpolate;
mod remez;

pub use extrema::{locate_extrema, Extremum};
pub use interpolate::{fit_interpolating, solve_leveled};
pub use remez::{fit_minimax, FitDiagnostics, MinimaxFit};

/// Band of the target response a location falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Region {
    #[strum(to_string = "passband")]
    Passband,
    #[strum(to_string = "stopband")]
    Stopband,
}

/// The desired step response: one on the passband [0, A], zero on the
/// stopband [B, 1], with an optional error weight on the passband.
///
/// A passband weight of `w` makes passband errors count `w` times as much
/// during fitting, so the converged passband ripple is the stopband ripple
/// divided by `w`.
#[derive(Clone, Copy, Debug)]
pub struct TargetSpec {
    passband_edge: f64,
    stopband_edge: f64,
    passband_weight: f64,
}

impl TargetSpec {
    /// Builds a target with unit weight. Requires `0 < A < B < 1`.
    pub fn new(
        passband_edge: f64,
        stopband_edge: f64,
    ) -> Result<TargetSpec, FitError> {
        if !passband_edge.is_finite() || !stopband_edge.is_finite() {
            return Err(FitError::InvalidParameter(
                "band edges must be finite".into(),
            ));
        }

        if passband_edge <= 0.0
            || passband_edge >= stopband_edge
            || stopband_edge >= 1.0
        {
            return Err(FitError::InvalidParameter(format!(
                "band edges must satisfy 0 < A < B < 1, got A = {}, B = {}",
                passband_edge, stopband_edge,
            )));
        }

        Ok(TargetSpec {
            passband_edge,
            stopband_edge,
            passband_weight: 1.0,
        })
    }

    /// Sets the passband error weight. Requires a positive, finite weight.
    pub fn with_passband_weight(
        mut self,
        weight: f64,
    ) -> Result<TargetSpec, FitError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(FitError::InvalidParameter(format!(
                "passband weight must be positive, got {weight}",
            )));
        }

        self.passband_weight = weight;

        Ok(self)
    }

    pub fn passband_edge(&self) -> f64 {
        self.passband_edge
    }

    pub fn stopband_edge(&self) -> f64 {
        self.stopband_edge
    }

    pub fn passband_weight(&self) -> f64 {
        self.passband_weight
    }

    /// Band a location is tagged with. Everything left of (and including)
    /// the passband edge counts as passband, the rest as stopband.
    pub fn region_of(&self, x: f64) -> Region {
        if x <= self.passband_edge {
            Region::Passband
        } else {
            Region::Stopband
        }
    }

    /// Desired response at `x`.
    pub fn desired(&self, x: f64) -> f64 {
        match self.region_of(x) {
            Region::Passband => 1.0,
            Region::Stopband => 0.0,
        }
    }

    /// Error weight at `x`.
    pub fn weight(&self, x: f64) -> f64 {
        match self.region_of(x) {
            Region::Passband => self.passband_weight,
            Region::Stopband => 1.0,
        }
    }
}

/// Splits `total` candidate points between the two bands proportionally to
/// their widths, keeping at least two points in each.
fn split_proportional(total: usize, target: &TargetSpec) -> (usize, usize) {
    debug_assert!(total >= 4);

    let a = target.passband_edge;
    let b = target.stopband_edge;

    let in_passband = (total as f64 * a / (a + 1.0 - b)) as usize;
    let in_passband = in_passband.clamp(2, total - 2);

    (in_passband, total - in_passband)
}

/// An error from a fitting routine.
#[derive(Debug)]
#[non_exhaustive]
pub enum FitError {
    /// A caller-supplied parameter is out of range; reported before any
    /// computation.
    InvalidParameter(String),
    /// The interpolation matrix is degenerate (coincident candidate
    /// abscissas).
    SingularSystem,
    /// The alternation search kept fewer candidates than the exchange
    /// needs, so the next system would be underdetermined.
    UnderdeterminedFit { found: usize, needed: usize },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FitError::InvalidParameter(msg) => {
                write!(f, "invalid parameter: {msg}")
            }
            FitError::SingularSystem => {
                write!(f, "interpolation system is singular")
            }
            FitError::UnderdeterminedFit { found, needed } => {
                write!(
                    f,
                    "alternation search kept {found} candidates, {needed} needed",
                )
            }
        }
    }
}

impl std::error::Error for FitError {}

impl From<SingularMatrix> for FitError {
    fn from(_: SingularMatrix) -> Self {
        FitError::SingularSystem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_validates_edges() {
        assert!(TargetSpec::new(0.4, 0.6).is_ok());
        assert!(matches!(
            TargetSpec::new(0.6, 0.4),
            Err(FitError::InvalidParameter(_))
        ));
        assert!(matches!(
            TargetSpec::new(0.0, 0.6),
            Err(FitError::InvalidParameter(_))
        ));
        assert!(matches!(
            TargetSpec::new(0.4, 1.0),
            Err(FitError::InvalidParameter(_))
        ));
    }

    #[test]
    fn target_validates_weight() {
        let target = TargetSpec::new(0.4, 0.6).unwrap();

        assert!(target.with_passband_weight(10.0).is_ok());
        assert!(matches!(
            target.with_passband_weight(0.0),
            Err(FitError::InvalidParameter(_))
        ));
        assert!(matches!(
            target.with_passband_weight(-1.0),
            Err(FitError::InvalidParameter(_))
        ));
    }

    #[test]
    fn desired_and_weight_follow_regions() {
        let target = TargetSpec::new(0.4, 0.6)
            .unwrap()
            .with_passband_weight(5.0)
            .unwrap();

        assert_eq!(target.region_of(0.4), Region::Passband);
        assert_eq!(target.region_of(0.5), Region::Stopband);
        assert_eq!(target.desired(0.1), 1.0);
        assert_eq!(target.desired(0.9), 0.0);
        assert_eq!(target.weight(0.1), 5.0);
        assert_eq!(target.weight(0.9), 1.0);
    }

    #[test]
    fn split_is_proportional() {
        let symmetric = TargetSpec::new(0.4, 0.6).unwrap();

        assert_eq!(split_proportional(10, &symmetric), (5, 5));

        // A narrow passband still gets its two-point floor.
        let narrow = TargetSpec::new(0.05, 0.5).unwrap();

        assert_eq!(split_proportional(7, &narrow), (2, 5));
    }
}
