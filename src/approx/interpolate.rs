//! Extended polynomial interpolation.

use super::{split_proportional, FitError, TargetSpec};
use crate::utils::linalg;
use crate::utils::poly::Polynomial;

/// Solves the leveled interpolation problem through the given points.
///
/// For N points the unknowns are the N-1 coefficients of a degree-(N-2)
/// polynomial plus a shared error level `e`, satisfying
///
/// ```text
/// P(x[i]) + (-1)^i * e / W(x[i]) = y[i]
/// ```
///
/// exactly for every i. The system matrix is the Vandermonde matrix of the
/// abscissas with its last column replaced by the alternating weighted error
/// term; for distinct abscissas it is non-singular. Returns the polynomial
/// and the magnitude of `e`.
pub fn solve_leveled<W>(
    x: &[f64],
    y: &[f64],
    weight: W,
) -> Result<(Polynomial, f64), FitError>
where
    W: Fn(f64) -> f64,
{
    assert_eq!(x.len(), y.len());
    assert!(x.len() >= 2);

    let n = x.len();
    let mut matrix = vec![0.0; n * n];

    for (i, &xi) in x.iter().enumerate() {
        let row = &mut matrix[i * n..(i + 1) * n];
        let mut power = 1.0;

        for entry in row.iter_mut().take(n - 1) {
            *entry = power;
            power *= xi;
        }

        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };

        row[n - 1] = sign / weight(xi);
    }

    let mut solution = y.to_vec();

    linalg::solve_in_place(&mut matrix, &mut solution, n)?;

    let error = solution.pop().unwrap_or_default().abs();

    Ok((Polynomial::new(solution), error))
}

/// Fits the unique interpolating polynomial of the given degree through
/// `order + 1` points spread over the two target bands, edges included.
///
/// This is the plain fitting baseline: it nails the chosen points exactly
/// but leaves the error free to swing between them, which is what the
/// equiripple fit improves on.
pub fn fit_interpolating(
    target: &TargetSpec,
    order: u32,
) -> Result<Polynomial, FitError> {
    if order < 3 {
        return Err(FitError::InvalidParameter(format!(
            "order must be at least 3, got {order}",
        )));
    }

    let points = order as usize + 1;
    let (in_passband, in_stopband) = split_proportional(points, target);

    let a = target.passband_edge();
    let b = target.stopband_edge();

    let mut x = Vec::with_capacity(points);

    // A point on each band edge, the rest evenly spaced between them.
    for i in 0..in_passband {
        x.push(i as f64 * a / (in_passband - 1) as f64);
    }

    for i in 0..in_stopband {
        x.push(b + i as f64 * (1.0 - b) / (in_stopband - 1) as f64);
    }

    let y: Vec<f64> = x.iter().map(|&xi| target.desired(xi)).collect();

    let n = points;
    let mut matrix = vec![0.0; n * n];

    for (i, &xi) in x.iter().enumerate() {
        let row = &mut matrix[i * n..(i + 1) * n];
        let mut power = 1.0;

        for entry in row.iter_mut() {
            *entry = power;
            power *= xi;
        }
    }

    let mut solution = y;

    linalg::solve_in_place(&mut matrix, &mut solution, n)?;

    Ok(Polynomial::new(solution))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leveled_residuals_alternate_at_common_magnitude() {
        // Seed points for a degree-5 fit over [0, 0.4] and [0.6, 1].
        let x = [0.08, 0.16, 0.24, 0.32, 0.7, 0.8, 0.9];
        let y = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0];

        let (poly, error) = solve_leveled(&x, &y, |_| 1.0).unwrap();

        assert_eq!(poly.degree(), 5);

        let residuals: Vec<f64> =
            x.iter().zip(&y).map(|(&xi, &yi)| yi - poly.eval(xi)).collect();

        for pair in residuals.windows(2) {
            assert!(
                pair[0] * pair[1] < 0.0,
                "residuals do not alternate: {residuals:?}"
            );
        }

        for r in &residuals {
            assert!(
                (r.abs() - error).abs() < 1e-8,
                "residual {r} departs from level {error}"
            );
        }
    }

    #[test]
    fn leveled_residuals_scale_with_weight() {
        let x = [0.08, 0.16, 0.24, 0.32, 0.7, 0.8, 0.9];
        let y = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0];
        let weight = |xi: f64| if xi <= 0.4 { 4.0 } else { 1.0 };

        let (poly, error) = solve_leveled(&x, &y, weight).unwrap();

        for (&xi, &yi) in x.iter().zip(&y) {
            let residual = (yi - poly.eval(xi)).abs() * weight(xi);

            assert!(
                (residual - error).abs() < 1e-8,
                "weighted residual {residual} departs from level {error}"
            );
        }
    }

    #[test]
    fn leveled_rejects_coincident_points() {
        let x = [0.1, 0.1, 0.3, 0.7, 0.9];
        let y = [1.0, 1.0, 1.0, 0.0, 0.0];

        assert!(matches!(
            solve_leveled(&x, &y, |_| 1.0),
            Err(FitError::SingularSystem)
        ));
    }

    #[test]
    fn interpolation_passes_through_band_edges() {
        let target = TargetSpec::new(0.4, 0.6).unwrap();
        let poly = fit_interpolating(&target, 8).unwrap();

        assert_eq!(poly.degree(), 8);

        for (x, want) in [(0.0, 1.0), (0.4, 1.0), (0.6, 0.0), (1.0, 0.0)] {
            assert!(
                (poly.eval(x) - want).abs() < 1e-6,
                "P({x}) = {}, want {want}",
                poly.eval(x)
            );
        }
    }

    #[test]
    fn interpolation_enforces_minimum_order() {
        let target = TargetSpec::new(0.4, 0.6).unwrap();

        assert!(matches!(
            fit_interpolating(&target, 2),
            Err(FitError::InvalidParameter(_))
        ));
    }
}
