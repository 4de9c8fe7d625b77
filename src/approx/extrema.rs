//! Error-extrema location.

use std::cmp;

use itertools::Itertools;

use crate::utils::poly::Polynomial;

/// Floor on the number of samples per band.
const MIN_BAND_SAMPLES: usize = 100;

/// Samples per expected error ripple; keeps the grid density growing with
/// the polynomial degree so no genuine extremum falls between samples.
const SAMPLES_PER_RIPPLE: usize = 8;

/// A located extremum of the weighted error curve.
#[derive(Clone, Copy, Debug)]
pub struct Extremum {
    pub location: f64,
    /// Signed weighted error `W(x) * (D(x) - P(x))` at `location`.
    pub error: f64,
}

impl Extremum {
    pub fn magnitude(&self) -> f64 {
        self.error.abs()
    }

    pub fn sign(&self) -> i8 {
        if self.error > 0.0 {
            1
        } else if self.error < 0.0 {
            -1
        } else {
            0
        }
    }
}

/// Finds the extrema of the weighted error of `poly` against the two-band
/// step target with the given edges.
///
/// For each band this reports the band endpoints plus every interior local
/// minimum or maximum of the error, in order of increasing location, with
/// the passband reported first. Interior extrema are flagged where the
/// sign of the discrete first difference changes over a dense uniform
/// sample, so locations are resolved to grid precision only.
pub fn locate_extrema<W>(
    poly: &Polynomial,
    passband_edge: f64,
    stopband_edge: f64,
    weight: W,
) -> Vec<Extremum>
where
    W: Fn(f64) -> f64,
{
    let samples = cmp::max(
        MIN_BAND_SAMPLES,
        SAMPLES_PER_RIPPLE * (poly.degree() + 2),
    );

    let mut out = Vec::new();

    for (desired, lo, hi) in
        [(1.0, 0.0, passband_edge), (0.0, stopband_edge, 1.0)]
    {
        let step = (hi - lo) / (samples - 1) as f64;

        let grid: Vec<Extremum> = (0..samples)
            .map(|i| {
                let x = lo + step * i as f64;

                Extremum {
                    location: x,
                    error: weight(x) * (desired - poly.eval(x)),
                }
            })
            .collect();

        out.push(grid[0]);

        let slopes = grid
            .windows(2)
            .map(|pair| sign_of(pair[1].error - pair[0].error));

        for (i, (before, after)) in slopes.tuple_windows().enumerate() {
            if before != after {
                out.push(grid[i + 1]);
            }
        }

        out.push(grid[samples - 1]);
    }

    out
}

fn sign_of(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}
