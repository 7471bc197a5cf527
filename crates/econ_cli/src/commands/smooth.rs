//! Smooth command implementation

use serde::Serialize;
use tracing::info;

use crate::output::{render_json, render_table, OutputFormat};
use crate::{CliError, Result};
use econ_core::math::smoothing::{PriceSmoother, DEFAULT_INITIAL_COVARIANCE};

#[derive(Debug, Serialize)]
struct SmoothedPoint {
    t: usize,
    observed: f64,
    smoothed: f64,
}

/// Run the smooth command
pub fn run(prices: &[f64], q: f64, r: f64, format: OutputFormat) -> Result<()> {
    if prices.is_empty() {
        return Err(CliError::InvalidArgument(
            "--prices needs at least one value".to_string(),
        ));
    }
    if let Some(bad) = prices.iter().find(|p| !p.is_finite()) {
        return Err(CliError::InvalidArgument(format!(
            "price {} is not finite",
            bad
        )));
    }

    info!("Smoothing {} prices (Q={}, R={})", prices.len(), q, r);

    let smoother = PriceSmoother::new(q, r, DEFAULT_INITIAL_COVARIANCE)?;
    let points = smooth_points(&smoother, prices);

    match format {
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = points
                .iter()
                .map(|p| {
                    vec![
                        p.t.to_string(),
                        format!("{:.4}", p.observed),
                        format!("{:.4}", p.smoothed),
                    ]
                })
                .collect();
            print!("{}", render_table(&["t", "Observed", "Smoothed"], &rows));
        }
        OutputFormat::Json => println!("{}", render_json(&points)?),
    }

    Ok(())
}

fn smooth_points(smoother: &PriceSmoother, prices: &[f64]) -> Vec<SmoothedPoint> {
    smoother
        .smooth(prices)
        .into_iter()
        .zip(prices)
        .enumerate()
        .map(|(t, (smoothed, &observed))| SmoothedPoint {
            t,
            observed,
            smoothed,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_keep_order() {
        let prices = [100.0, 101.0, 130.0, 103.0, 104.0];
        let points = smooth_points(&PriceSmoother::default(), &prices);

        assert_eq!(points.len(), 5);
        assert_eq!(points[0].smoothed, 100.0);
        assert_eq!(points[2].observed, 130.0);
        assert!(points[2].smoothed < 115.0);
    }

    #[test]
    fn test_rejects_empty_and_bad_variance() {
        assert!(matches!(
            run(&[], 1e-5, 0.1, OutputFormat::Table),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            run(&[1.0], 1e-5, 0.0, OutputFormat::Table),
            Err(CliError::Simulation(_))
        ));
    }
}
