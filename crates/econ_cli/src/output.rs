//! Result rendering.
//!
//! Commands print either a box-drawn table or pretty JSON to stdout. Logs go
//! to stderr so JSON output can be piped.

use clap::ValueEnum;
use econ_models::scoring::{CategoryScore, ScoreCard};
use econ_pricing::economy::{PricingResult, ReplicationSummary};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Output format of a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Renders rows under headers as a box-drawn table.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| -> String {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                format!(" {:<width$} ", cell, width = w)
            })
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(&header_cells));
    out.push_str(&rule("├", "┼", "┤"));
    for row in rows {
        out.push_str(&line(row));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

/// Pretty JSON of any serialisable value.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One row per run: alpha, Rf, Re, equity premium, clamps, Euler residual.
pub fn render_results_table(results: &[PricingResult]) -> String {
    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|r| {
            vec![
                format!("{:.2}", r.alpha),
                format!("{:.6}", r.rf_mean),
                format!("{:.6}", r.re_mean),
                format!("{:+.6}", r.equity_premium),
                r.clamped_periods.to_string(),
                format!("{:+.6}", r.euler_residual),
            ]
        })
        .collect();
    render_table(
        &["alpha", "Rf", "Re", "Equity premium", "Clamped", "Euler residual"],
        &rows,
    )
}

/// Mean and dispersion of each moment across replications.
pub fn render_replication_table(summary: &ReplicationSummary) -> String {
    let fmt_sd = |sd: Option<f64>| sd.map_or_else(|| "n/a".to_string(), |v| format!("{:.6}", v));
    let rows = vec![
        vec![
            "Rf".to_string(),
            format!("{:.6}", summary.rf_mean.mean),
            fmt_sd(summary.rf_mean.std_dev),
        ],
        vec![
            "Re".to_string(),
            format!("{:.6}", summary.re_mean.mean),
            fmt_sd(summary.re_mean.std_dev),
        ],
        vec![
            "Equity premium".to_string(),
            format!("{:+.6}", summary.equity_premium.mean),
            fmt_sd(summary.equity_premium.std_dev),
        ],
        vec![
            "Euler residual".to_string(),
            format!("{:+.6}", summary.euler_residual.mean),
            fmt_sd(summary.euler_residual.std_dev),
        ],
    ];
    render_table(&["Moment", "Mean", "Std dev"], &rows)
}

/// Category scores, total and band.
pub fn render_score_table(card: &ScoreCard) -> String {
    let category = |name: &str, score: &CategoryScore| -> Vec<String> {
        let detail = match &score.note {
            Some(note) => note.clone(),
            None => score
                .parts
                .iter()
                .map(|(k, v)| format!("{}={:.2}", k, v))
                .collect::<Vec<_>>()
                .join(", "),
        };
        vec![name.to_string(), format!("{:.2}", score.score), detail]
    };

    let rows = vec![
        category("Quality", &card.quality),
        category("Financial strength", &card.financial_strength),
        category("Growth", &card.growth),
        category("Valuation", &card.valuation),
        vec![
            "Management".to_string(),
            format!("{:.2}", card.management),
            "fixed".to_string(),
        ],
        vec![
            "Total".to_string(),
            format!("{:.2}", card.total_weighted_score),
            card.decision_band.to_string(),
        ],
    ];
    render_table(&["Category", "Score", "Detail"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_alignment() {
        let table = render_table(
            &["a", "long header"],
            &[vec!["wide cell".to_string(), "x".to_string()]],
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        assert!(lines[1].contains("long header"));
        assert!(lines[3].contains("wide cell"));
    }

    #[test]
    fn test_render_results_table() {
        let result = PricingResult {
            alpha: 0.8,
            rf_mean: 0.97,
            re_mean: 1.01,
            equity_premium: 0.04,
            clamped_periods: 3,
            euler_residual: -0.001,
        };
        let table = render_results_table(&[result]);

        assert!(table.contains("0.80"));
        assert!(table.contains("0.970000"));
        assert!(table.contains("+0.040000"));
        assert!(table.contains("Clamped"));
    }

    #[test]
    fn test_render_json_round_trips_fields() {
        let result = PricingResult {
            alpha: 0.0,
            rf_mean: 1.01,
            re_mean: 1.02,
            equity_premium: 0.01,
            clamped_periods: 0,
            euler_residual: 0.0,
        };
        let json = render_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rf_mean"], 1.01);
        assert_eq!(value["clamped_periods"], 0);
    }

    #[test]
    fn test_output_format_parses() {
        let format: OutputFormat = toml::from_str::<std::collections::HashMap<String, OutputFormat>>(
            "format = \"json\"",
        )
        .unwrap()["format"];
        assert_eq!(format, OutputFormat::Json);
    }
}
