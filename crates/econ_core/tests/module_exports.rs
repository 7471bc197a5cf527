//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Statistics helpers are generic over f32 and f64.
#[test]
fn test_stats_module_exports() {
    use econ_core::math::stats::{mean, mean_product, sample_covariance, sample_std_dev};

    assert_eq!(mean(&[1.0_f32, 3.0]), Some(2.0));
    assert_eq!(mean_product(&[2.0_f64, 2.0], &[3.0, 5.0]), Some(8.0));
    assert!(sample_std_dev(&[1.0_f64, 2.0, 3.0]).is_some());
    assert!(sample_covariance(&[1.0_f64], &[1.0]).is_none());
}

/// Covariance factors are reachable and agree on the matrix they factor.
#[test]
fn test_covariance_module_exports() {
    use econ_core::math::covariance::{CholeskyFactor2, Covariance2, SpectralFactor2};

    let cov = Covariance2::from_volatilities(0.2, 0.3, 1.0 / 6.0).unwrap();
    let chol: CholeskyFactor2 = cov.cholesky();
    let spectral: SpectralFactor2 = cov.spectral();

    let rebuilt = spectral.reconstruct();
    let original = cov.as_matrix();
    for i in 0..2 {
        for j in 0..2 {
            assert!((rebuilt[i][j] - original[i][j]).abs() < 1e-14);
        }
    }

    // Both factors map a unit shock on the first axis to a vector whose
    // squared length is at most the total variance.
    for x in [chol.transform([1.0, 0.0]), spectral.transform([1.0, 0.0])] {
        assert!(x[0] * x[0] + x[1] * x[1] <= 0.13 + 1e-12);
    }
}

/// Smoother and its defaults are reachable.
#[test]
fn test_smoothing_module_exports() {
    use econ_core::math::smoothing::{
        PriceSmoother, DEFAULT_INITIAL_COVARIANCE, DEFAULT_MEASUREMENT_VARIANCE,
        DEFAULT_PROCESS_VARIANCE,
    };

    let explicit = PriceSmoother::new(
        DEFAULT_PROCESS_VARIANCE,
        DEFAULT_MEASUREMENT_VARIANCE,
        DEFAULT_INITIAL_COVARIANCE,
    )
    .unwrap();
    assert_eq!(explicit, PriceSmoother::default());
}

/// Error types are re-exported from `types`.
#[test]
fn test_error_exports() {
    use econ_core::types::error::SimulationError as Direct;
    use econ_core::types::{ScoringError, SimulationError, Stage};

    let err: Direct = SimulationError::invalid("beta", "must lie in (0, 1)");
    assert_eq!(err.stage(), Stage::Validation);

    let scoring = ScoringError::InvalidParameters {
        name: "price",
        reason: "must be positive".to_string(),
    };
    assert!(scoring.to_string().contains("price"));
}

/// Stage serialises as snake_case.
#[test]
fn test_stage_serialises() {
    use econ_core::types::Stage;

    let json = serde_json::to_string(&Stage::KernelDerivation).unwrap();
    assert_eq!(json, "\"kernel_derivation\"");
}
