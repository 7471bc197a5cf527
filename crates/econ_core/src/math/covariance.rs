//! Bivariate covariance matrices and their square-root factors.
//!
//! This module provides the infrastructure for drawing correlated normal
//! pairs from independent standard normals.
//!
//! ## Mathematical Background
//!
//! Given independent standard normals `Z = [Z1, Z2]` and any matrix `A` with
//! `A * A^T = Σ`, the vector `X = μ + A * Z` is normal with mean `μ` and
//! covariance `Σ`. Two choices of `A` are provided:
//!
//! ```text
//! Cholesky:  A = L,              L lower triangular, Σ = L * L^T
//! Spectral:  A = V * sqrt(Λ),    Σ = V * Λ * V^T (symmetric eigendecomposition)
//! ```
//!
//! Both factors accept positive *semi*-definite matrices, so zero variances
//! and perfect correlation (`|ρ| = 1`) are valid degenerate cases.
//!
//! ## Usage
//!
//! ```
//! use econ_core::math::covariance::Covariance2;
//!
//! let cov = Covariance2::from_volatilities(0.02, 0.10, 0.6).unwrap();
//! let chol = cov.cholesky();
//!
//! let [x, y] = chol.transform([1.0, 0.0]);
//! assert!((x - 0.02).abs() < 1e-15);
//! assert!((y - 0.6 * 0.10).abs() < 1e-15);
//! ```

use crate::types::{SimulationError, Stage};

/// Validated symmetric positive semi-definite 2×2 covariance matrix.
///
/// ```text
/// | var_x   cov_xy |
/// | cov_xy  var_y  |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Covariance2 {
    var_x: f64,
    var_y: f64,
    cov_xy: f64,
}

impl Covariance2 {
    /// Builds the covariance matrix from two volatilities and a correlation.
    ///
    /// # Arguments
    ///
    /// * `sigma_x` - Volatility of the first component (non-negative)
    /// * `sigma_y` - Volatility of the second component (non-negative)
    /// * `rho` - Correlation in [-1, 1]
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidParameters` at [`Stage::ShockGeneration`] for
    /// negative or non-finite volatilities or a correlation outside [-1, 1].
    pub fn from_volatilities(sigma_x: f64, sigma_y: f64, rho: f64) -> Result<Self, SimulationError> {
        check_volatility("sigma_x", sigma_x)?;
        check_volatility("sigma_y", sigma_y)?;
        if !rho.is_finite() || !(-1.0..=1.0).contains(&rho) {
            return Err(SimulationError::invalid_at(
                Stage::ShockGeneration,
                "rho",
                format!("correlation must lie in [-1, 1], got {}", rho),
            ));
        }

        Ok(Self {
            var_x: sigma_x * sigma_x,
            var_y: sigma_y * sigma_y,
            cov_xy: rho * sigma_x * sigma_y,
        })
    }

    /// Variance of the first component.
    #[inline]
    pub fn var_x(&self) -> f64 {
        self.var_x
    }

    /// Variance of the second component.
    #[inline]
    pub fn var_y(&self) -> f64 {
        self.var_y
    }

    /// Off-diagonal covariance.
    #[inline]
    pub fn covariance(&self) -> f64 {
        self.cov_xy
    }

    /// Row-major matrix representation.
    pub fn as_matrix(&self) -> [[f64; 2]; 2] {
        [[self.var_x, self.cov_xy], [self.cov_xy, self.var_y]]
    }

    /// Lower triangular Cholesky factor.
    ///
    /// A zero variance in the first component forces a zero off-diagonal
    /// (semi-definiteness), so the factor is well defined for every
    /// validated matrix.
    pub fn cholesky(&self) -> CholeskyFactor2 {
        let l11 = self.var_x.max(0.0).sqrt();
        let l21 = if l11 > 0.0 { self.cov_xy / l11 } else { 0.0 };
        let l22 = (self.var_y - l21 * l21).max(0.0).sqrt();
        CholeskyFactor2 { l11, l21, l22 }
    }

    /// Spectral factor `V * sqrt(Λ)` from the symmetric eigendecomposition.
    pub fn spectral(&self) -> SpectralFactor2 {
        let (a, b, c) = (self.var_x, self.cov_xy, self.var_y);
        let half_trace = 0.5 * (a + c);
        let radius = (0.25 * (a - c) * (a - c) + b * b).sqrt();
        let lambda_1 = half_trace + radius;
        let lambda_2 = (half_trace - radius).max(0.0);

        // Eigenvector of the larger eigenvalue; the second is its rotation.
        let (x, y) = (lambda_1 - c, b);
        let norm = x.hypot(y);
        let (vx, vy) = if b != 0.0 && norm > 0.0 {
            (x / norm, y / norm)
        } else if a >= c {
            (1.0, 0.0)
        } else {
            (0.0, 1.0)
        };

        SpectralFactor2 {
            eigenvalues: [lambda_1, lambda_2],
            eigenvectors: [[vx, vy], [-vy, vx]],
        }
    }
}

fn check_volatility(name: &'static str, sigma: f64) -> Result<(), SimulationError> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(SimulationError::invalid_at(
            Stage::ShockGeneration,
            name,
            format!("volatility must be finite and non-negative, got {}", sigma),
        ));
    }
    Ok(())
}

/// Lower triangular Cholesky factor of a 2×2 covariance matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CholeskyFactor2 {
    l11: f64,
    l21: f64,
    l22: f64,
}

impl CholeskyFactor2 {
    /// Returns the factor as a row-major lower triangular matrix.
    pub fn as_matrix(&self) -> [[f64; 2]; 2] {
        [[self.l11, 0.0], [self.l21, self.l22]]
    }

    /// Maps independent standard normals to correlated zero-mean normals.
    #[inline]
    pub fn transform(&self, z: [f64; 2]) -> [f64; 2] {
        [self.l11 * z[0], self.l21 * z[0] + self.l22 * z[1]]
    }
}

/// Spectral square-root factor of a 2×2 covariance matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpectralFactor2 {
    /// Eigenvalues, largest first.
    eigenvalues: [f64; 2],
    /// Unit eigenvectors (one per row) matching `eigenvalues`.
    eigenvectors: [[f64; 2]; 2],
}

impl SpectralFactor2 {
    /// Eigenvalues in descending order.
    pub fn eigenvalues(&self) -> [f64; 2] {
        self.eigenvalues
    }

    /// Maps independent standard normals to correlated zero-mean normals.
    #[inline]
    pub fn transform(&self, z: [f64; 2]) -> [f64; 2] {
        let s1 = self.eigenvalues[0].sqrt() * z[0];
        let s2 = self.eigenvalues[1].sqrt() * z[1];
        let [v1, v2] = self.eigenvectors;
        [s1 * v1[0] + s2 * v2[0], s1 * v1[1] + s2 * v2[1]]
    }

    /// Reconstructs `V * Λ * V^T`.
    pub fn reconstruct(&self) -> [[f64; 2]; 2] {
        let [l1, l2] = self.eigenvalues;
        let [v1, v2] = self.eigenvectors;
        let entry = |i: usize, j: usize| l1 * v1[i] * v1[j] + l2 * v2[i] * v2[j];
        [[entry(0, 0), entry(0, 1)], [entry(1, 0), entry(1, 1)]]
    }
}
