//! Polynomials in power form.

/// A real polynomial stored as ascending coefficients, so that
/// `coeffs()[k]` multiplies `x^k`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Wraps a coefficient vector. The degree is `coeffs.len() - 1`; trailing
    /// zeros are kept as given.
    pub fn new(coeffs: Vec<f64>) -> Polynomial {
        assert!(!coeffs.is_empty(), "a polynomial has at least one coefficient");

        Polynomial { coeffs }
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluates the polynomial at `x` by Horner's rule.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_constant() {
        let p = Polynomial::new(vec![3.5]);

        assert_eq!(p.degree(), 0);
        assert_eq!(p.eval(0.0), 3.5);
        assert_eq!(p.eval(-2.0), 3.5);
    }

    #[test]
    fn eval_cubic() {
        // 1 - 2x + x^3
        let p = Polynomial::new(vec![1.0, -2.0, 0.0, 1.0]);

        assert_eq!(p.degree(), 3);
        assert_eq!(p.eval(0.0), 1.0);
        assert_eq!(p.eval(1.0), 0.0);
        assert_eq!(p.eval(2.0), 5.0);
    }

    #[test]
    fn eval_matches_power_sum() {
        let p = Polynomial::new(vec![0.25, -1.0, 2.0, 0.5, -0.125]);
        let x: f64 = 0.73;

        let direct: f64 = p
            .coeffs()
            .iter()
            .enumerate()
            .map(|(k, &c)| c * x.powi(k as i32))
            .sum();

        assert!((p.eval(x) - direct).abs() < 1e-12);
    }
}
