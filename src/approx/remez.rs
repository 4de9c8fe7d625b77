//! Remez exchange.

use log::debug;
use smallvec::SmallVec;

use super::extrema::{locate_extrema, Extremum};
use super::interpolate::solve_leveled;
use super::{split_proportional, FitError, TargetSpec};
use crate::utils::poly::Polynomial;

/// Slack when filtering extremum candidates against the leveled error,
/// absorbing sampling and rounding noise.
const SELECTION_TOLERANCE: f64 = 1e-3;

/// Result of a minimax fit.
#[derive(Clone, Debug)]
pub struct MinimaxFit {
    pub polynomial: Polynomial,
    /// Leveled weighted error of the final interpolation; at convergence
    /// this is the common magnitude of all error extrema. The passband
    /// ripple is `error` divided by the passband weight, the stopband
    /// ripple is `error` itself.
    pub error: f64,
    pub diagnostics: FitDiagnostics,
}

/// Diagnostic state left behind by the exchange driver.
#[derive(Clone, Debug, Default)]
pub struct FitDiagnostics {
    /// Iterations actually performed.
    pub iterations: u32,
    /// Leveled error after each solve.
    pub error_history: Vec<f64>,
    /// Candidate abscissas selected by the final iteration.
    pub candidates: Vec<f64>,
}

/// An alternation candidate tracked during selection.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    location: f64,
    sign: i8,
    magnitude: f64,
}

type Candidates = SmallVec<[Candidate; 16]>;

/// Fits the degree-`order` polynomial minimizing the maximum weighted error
/// against the two-band step target, by Remez exchange.
///
/// The driver seeds `order + 2` candidate points split between the bands in
/// proportion to their widths, then repeatedly solves the leveled
/// interpolation problem through the candidates, locates the extrema of the
/// resulting error curve, and keeps the `order + 2` largest
/// alternating-sign extrema as the next candidate set. There is no
/// convergence test: `iterations` is the caller-chosen budget, and the
/// polynomial and error from the last solve are returned as is.
pub fn fit_minimax(
    target: &TargetSpec,
    order: u32,
    iterations: u32,
) -> Result<MinimaxFit, FitError> {
    if order < 3 {
        return Err(FitError::InvalidParameter(format!(
            "order must be at least 3, got {order}",
        )));
    }

    if iterations == 0 {
        return Err(FitError::InvalidParameter(
            "iteration budget must be at least 1".into(),
        ));
    }

    let needed = order as usize + 2;
    let (mut x, mut y) = seed_candidates(target, needed);

    let mut diagnostics = FitDiagnostics::default();
    let mut fitted: Option<(Polynomial, f64)> = None;

    for iteration in 0..iterations {
        let (poly, error) = solve_leveled(&x, &y, |t| target.weight(t))?;

        let found = locate_extrema(
            &poly,
            target.passband_edge(),
            target.stopband_edge(),
            |t| target.weight(t),
        );

        let kept = select_alternations(&found, error, needed)?;

        debug!(
            "iteration {iteration}: leveled error {error:.3e}, \
             {} extrema, kept {}",
            found.len(),
            kept.len(),
        );

        x = kept.iter().map(|c| c.location).collect();
        y = x.iter().map(|&xi| target.desired(xi)).collect();

        diagnostics.error_history.push(error);
        fitted = Some((poly, error));
    }

    let (polynomial, error) = fitted.expect("no iterations performed");

    diagnostics.iterations = iterations;
    diagnostics.candidates = x;

    Ok(MinimaxFit {
        polynomial,
        error,
        diagnostics,
    })
}

/// Places the initial candidate points: a proportional split between the
/// bands, evenly spaced strictly inside each.
fn seed_candidates(
    target: &TargetSpec,
    total: usize,
) -> (Vec<f64>, Vec<f64>) {
    let (in_passband, in_stopband) = split_proportional(total, target);

    let a = target.passband_edge();
    let b = target.stopband_edge();

    let mut x = Vec::with_capacity(total);

    for i in 1..=in_passband {
        x.push(i as f64 * a / (in_passband + 1) as f64);
    }

    for i in 1..=in_stopband {
        x.push(b + i as f64 * (1.0 - b) / (in_stopband + 1) as f64);
    }

    let y = x.iter().map(|&xi| target.desired(xi)).collect();

    (x, y)
}

/// Walks the extrema left to right and keeps a maximal alternating-sign
/// subsequence of those within tolerance of the leveled error.
///
/// A same-signed candidate replaces the previously kept one when its
/// magnitude is larger. If more than `needed` survive, the list is trimmed
/// by dropping whichever end has the smaller magnitude; if fewer survive,
/// the exchange cannot continue and the fit fails.
fn select_alternations(
    found: &[Extremum],
    leveled_error: f64,
    needed: usize,
) -> Result<Candidates, FitError> {
    let mut kept = Candidates::new();

    for extremum in found {
        let candidate = Candidate {
            location: extremum.location,
            sign: extremum.sign(),
            magnitude: extremum.magnitude(),
        };

        if candidate.magnitude < leveled_error - SELECTION_TOLERANCE {
            continue;
        }

        match kept.last() {
            None => kept.push(candidate),
            Some(last) if last.sign != candidate.sign => kept.push(candidate),
            Some(last) if last.magnitude < candidate.magnitude => {
                kept.pop();
                kept.push(candidate);
            }
            Some(_) => {}
        }
    }

    while kept.len() > needed {
        if kept[0].magnitude > kept[kept.len() - 1].magnitude {
            kept.pop();
        } else {
            kept.remove(0);
        }
    }

    if kept.len() < needed {
        return Err(FitError::UnderdeterminedFit {
            found: kept.len(),
            needed,
        });
    }

    Ok(kept)
}
