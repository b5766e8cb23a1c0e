/*!
 * Confidence ellipse of a 2D covariance matrix.
 *
 * Given two samples, their covariance matrix and a confidence level, this
 * module computes the geometry of the ellipse containing that probability
 * mass under a bivariate normal assumption. The host plotting library draws
 * the ellipse from the returned center, axis lengths and rotation angle.
 */
use std::fmt;

use nalgebra::Matrix2;
use statrs::distribution::{ChiSquared, ContinuousCDF, Normal};

/// Errors that can occur when computing a confidence ellipse
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// One of the sample slices is empty
    EmptySamples,
    /// The sample slices have different lengths
    SampleLenMismatch {
        /// Length of the x sample
        x: usize,
        /// Length of the y sample
        y: usize,
    },
    /// The probability mass is outside the open interval (0, 1)
    InvalidProbability(f64),
    /// The standard-deviation count is not a positive finite number
    InvalidSigma(f64),
    /// The covariance matrix is not symmetric
    NotSymmetric {
        /// The upper off-diagonal entry
        c01: f64,
        /// The lower off-diagonal entry
        c10: f64,
    },
    /// The covariance matrix has a negative eigenvalue
    NotPositiveSemiDefinite {
        /// The offending eigenvalue
        eigenvalue: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySamples => write!(f, "Samples must not be empty"),
            Error::SampleLenMismatch { x, y } => {
                write!(f, "Sample length mismatch: {x} x values, {y} y values")
            }
            Error::InvalidProbability(q) => {
                write!(f, "Probability mass must be in (0, 1), got {q}")
            }
            Error::InvalidSigma(n) => {
                write!(f, "Standard-deviation count must be positive, got {n}")
            }
            Error::NotSymmetric { c01, c10 } => {
                write!(f, "Covariance matrix is not symmetric: {c01} != {c10}")
            }
            Error::NotPositiveSemiDefinite { eigenvalue } => {
                write!(
                    f,
                    "Covariance matrix is not positive semi-definite: eigenvalue {eigenvalue}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// A confidence level, given either as a probability mass or as a number of
/// standard deviations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Confidence(Spec);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Spec {
    Probability(f64),
    Sigma(f64),
}

impl Confidence {
    /// Confidence as a probability mass `q` in the open interval (0, 1)
    pub fn probability(q: f64) -> Result<Confidence, Error> {
        if !q.is_finite() || q <= 0.0 || q >= 1.0 {
            return Err(Error::InvalidProbability(q));
        }
        Ok(Confidence(Spec::Probability(q)))
    }

    /// Confidence as a number of standard deviations `n`, e.g. 1 for 68.3%
    /// and 2 for 95.4%
    pub fn sigma(n: f64) -> Result<Confidence, Error> {
        if !n.is_finite() || n <= 0.0 {
            return Err(Error::InvalidSigma(n));
        }
        Ok(Confidence(Spec::Sigma(n)))
    }

    /// Resolve the confidence to a probability mass.
    /// A standard-deviation count resolves through the standard normal CDF.
    pub fn to_probability(&self) -> f64 {
        match self.0 {
            Spec::Probability(q) => q,
            Spec::Sigma(n) => {
                let normal = Normal::new(0.0, 1.0).unwrap();
                2.0 * normal.cdf(n) - 1.0
            }
        }
    }
}

/// The geometry of a confidence ellipse.
/// `width` and `height` are full axis lengths, not semi-axes, and `angle`
/// rotates the width axis counter-clockwise, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    /// X coordinate of the center
    pub center_x: f64,
    /// Y coordinate of the center
    pub center_y: f64,
    /// Full length of the first axis
    pub width: f64,
    /// Full length of the second axis
    pub height: f64,
    /// Rotation of the width axis, counter-clockwise degrees
    pub angle: f64,
}

// Below this (relative to the largest eigenvalue), a negative eigenvalue is
// rounding noise from a singular matrix and clamps to zero.
const EIGENVALUE_TOL: f64 = 1e-12;

/// Compute the confidence ellipse of `cov` at the given confidence level,
/// centered on the means of the `x` and `y` samples.
///
/// `cov` must be symmetric positive semi-definite; the off-diagonal entries
/// are compared exactly and a negative eigenvalue beyond rounding tolerance
/// is an error. The samples only provide the center and may hold any values;
/// they must be non-empty and of equal length.
pub fn confidence_ellipse(
    x: &[f64],
    y: &[f64],
    cov: &Matrix2<f64>,
    confidence: Confidence,
) -> Result<Ellipse, Error> {
    if x.is_empty() || y.is_empty() {
        return Err(Error::EmptySamples);
    }
    if x.len() != y.len() {
        return Err(Error::SampleLenMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    let (c01, c10) = (cov[(0, 1)], cov[(1, 0)]);
    if c01 != c10 {
        return Err(Error::NotSymmetric { c01, c10 });
    }

    let q = confidence.to_probability();
    let r2 = ChiSquared::new(2.0).unwrap().inverse_cdf(q);

    let eigen = cov.symmetric_eigen();
    // ascending eigenvalue order; the decomposition does not guarantee it
    let (lo, hi) = if eigen.eigenvalues[0] <= eigen.eigenvalues[1] {
        (0, 1)
    } else {
        (1, 0)
    };
    let (mut l0, l1) = (eigen.eigenvalues[lo], eigen.eigenvalues[hi]);
    if l0 < -EIGENVALUE_TOL * l1.abs().max(1.0) {
        return Err(Error::NotPositiveSemiDefinite { eigenvalue: l0 });
    }
    l0 = l0.max(0.0);

    let v0 = eigen.eigenvectors.column(lo);
    let angle = v0[1].atan2(v0[0]).to_degrees();

    Ok(Ellipse {
        center_x: mean(x),
        center_y: mean(y),
        width: 2.0 * (l0 * r2).sqrt(),
        height: 2.0 * (l1 * r2).sqrt(),
        angle,
    })
}

fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal as NormalDist};

    use super::*;
    use crate::tests::{Near, assert_near};

    const X: &[f64] = &[0.0, 2.0];
    const Y: &[f64] = &[0.0, 4.0];

    fn angle_delta_mod180(a: f64, b: f64) -> f64 {
        let delta = (a - b).rem_euclid(180.0);
        delta.min(180.0 - delta)
    }

    #[test]
    fn sigma_and_probability_are_equivalent() {
        let cov = Matrix2::new(0.5, -0.5, -0.5, 1.0);
        let normal = Normal::new(0.0, 1.0).unwrap();
        for n in [0.5, 1.0, 2.0, 3.0] {
            let q = 2.0 * normal.cdf(n) - 1.0;
            let from_sigma =
                confidence_ellipse(X, Y, &cov, Confidence::sigma(n).unwrap()).unwrap();
            let from_q =
                confidence_ellipse(X, Y, &cov, Confidence::probability(q).unwrap()).unwrap();
            assert_near!(abs, from_sigma.width, from_q.width, 1e-9);
            assert_near!(abs, from_sigma.height, from_q.height, 1e-9);
            assert_near!(abs, from_sigma.angle, from_q.angle, 1e-9);
        }
    }

    #[test]
    fn identity_covariance_is_circular() {
        let cov = Matrix2::identity();
        let ellipse = confidence_ellipse(X, Y, &cov, Confidence::sigma(1.0).unwrap()).unwrap();

        assert_near!(abs, ellipse.width, ellipse.height, 1e-9);
        // 2 * sqrt of the chi-squared(2) quantile at 2 * cdf(1) - 1
        assert_near!(abs, ellipse.width, 3.0303, 1e-3);
    }

    #[test]
    fn center_is_sample_means() {
        let cov = Matrix2::new(0.5, -0.5, -0.5, 1.0);
        let ellipse = confidence_ellipse(X, Y, &cov, Confidence::sigma(1.0).unwrap()).unwrap();
        assert_near!(abs, ellipse.center_x, 1.0, 1e-12);
        assert_near!(abs, ellipse.center_y, 2.0, 1e-12);
    }

    #[test]
    fn angle_is_scale_invariant() {
        let cov = Matrix2::new(0.5, -0.5, -0.5, 1.0);
        let scaled = cov * 4.0;
        let conf = Confidence::sigma(1.0).unwrap();
        let a = confidence_ellipse(X, Y, &cov, conf).unwrap();
        let b = confidence_ellipse(X, Y, &scaled, conf).unwrap();
        assert_near!(abs, angle_delta_mod180(a.angle, b.angle), 0.0, 1e-9);
        // axes scale with the square root of the matrix scale
        assert_near!(rel, b.width, 2.0 * a.width, 1e-9);
        assert_near!(rel, b.height, 2.0 * a.height, 1e-9);
    }

    #[test]
    fn angle_follows_minor_axis_eigenvector() {
        // minor-axis eigenvector of this matrix is (1, (sqrt(5) - 1) / 2)
        let cov = Matrix2::new(0.5, -0.5, -0.5, 1.0);
        let ellipse = confidence_ellipse(X, Y, &cov, Confidence::sigma(1.0).unwrap()).unwrap();
        let expected = (0.5 * (5f64.sqrt() - 1.0)).atan2(1.0).to_degrees();
        assert_near!(abs, angle_delta_mod180(ellipse.angle, expected), 0.0, 1e-9);
    }

    #[test]
    fn invalid_confidence_specs() {
        assert_eq!(
            Confidence::probability(0.0),
            Err(Error::InvalidProbability(0.0))
        );
        assert_eq!(
            Confidence::probability(1.0),
            Err(Error::InvalidProbability(1.0))
        );
        assert!(Confidence::probability(f64::NAN).is_err());
        assert_eq!(Confidence::sigma(0.0), Err(Error::InvalidSigma(0.0)));
        assert_eq!(Confidence::sigma(-2.0), Err(Error::InvalidSigma(-2.0)));
        assert!(Confidence::sigma(f64::INFINITY).is_err());
    }

    #[test]
    fn invalid_samples() {
        let cov = Matrix2::identity();
        let conf = Confidence::sigma(1.0).unwrap();
        assert_eq!(
            confidence_ellipse(&[], &[], &cov, conf),
            Err(Error::EmptySamples)
        );
        assert_eq!(
            confidence_ellipse(&[1.0, 2.0], &[1.0], &cov, conf),
            Err(Error::SampleLenMismatch { x: 2, y: 1 })
        );
    }

    #[test]
    fn invalid_covariance() {
        let conf = Confidence::sigma(1.0).unwrap();

        let asym = Matrix2::new(1.0, 0.5, -0.5, 1.0);
        assert_eq!(
            confidence_ellipse(X, Y, &asym, conf),
            Err(Error::NotSymmetric { c01: 0.5, c10: -0.5 })
        );

        let negative = Matrix2::new(-1.0, 0.0, 0.0, -1.0);
        assert!(matches!(
            confidence_ellipse(X, Y, &negative, conf),
            Err(Error::NotPositiveSemiDefinite { .. })
        ));
    }

    #[test]
    fn singular_covariance_degenerates_to_segment() {
        // rank-1 matrix: all mass along the diagonal direction
        let cov = Matrix2::new(1.0, 1.0, 1.0, 1.0);
        let ellipse = confidence_ellipse(X, Y, &cov, Confidence::sigma(1.0).unwrap()).unwrap();
        assert_near!(abs, ellipse.width, 0.0, 1e-6);
        assert!(ellipse.height > 0.0);
    }

    #[test]
    fn sample_covariance_of_standard_normal_population() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(586350478348);
        let normal = NormalDist::new(0.0, 1.0).unwrap();
        const N: usize = 10_000;

        let x: Vec<f64> = (0..N).map(|_| normal.sample(&mut rng)).collect();
        let y: Vec<f64> = (0..N).map(|_| normal.sample(&mut rng)).collect();

        let (mx, my) = (mean(&x), mean(&y));
        let mut cov = Matrix2::zeros();
        for (xi, yi) in x.iter().zip(&y) {
            cov[(0, 0)] += (xi - mx) * (xi - mx);
            cov[(0, 1)] += (xi - mx) * (yi - my);
            cov[(1, 1)] += (yi - my) * (yi - my);
        }
        cov /= (N - 1) as f64;
        cov[(1, 0)] = cov[(0, 1)];

        let ellipse =
            confidence_ellipse(&x, &y, &cov, Confidence::sigma(1.0).unwrap()).unwrap();
        assert_near!(abs, ellipse.center_x, 0.0, 0.05);
        assert_near!(abs, ellipse.center_y, 0.0, 0.05);
        assert_near!(abs, ellipse.width, 3.03, 0.15);
        assert_near!(abs, ellipse.height, 3.03, 0.15);
    }
}
