//! Non-interactive output for `--report`

use roiplan_core::{ExportError, RoiResult, RoiScenario, compute, export::to_csv};
use serde::Serialize;

use crate::util::format::{format_currency_short, format_months, format_multiple};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Aligned metric/value table
    Table,
    /// Header row plus one value row
    Csv,
    /// Scenario and result as JSON
    Json,
}

#[derive(Debug)]
pub enum ReportError {
    Export(ExportError),
    Json(serde_json::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Export(e) => write!(f, "{e}"),
            ReportError::Json(e) => write!(f, "JSON encoding failed: {e}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Export(e) => Some(e),
            ReportError::Json(e) => Some(e),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    scenario: &'a RoiScenario,
    result: &'a RoiResult,
}

/// Rows of the results table, with ROI rounded to 2 places and payback to 1
pub fn result_rows(result: &RoiResult) -> Vec<(&'static str, String)> {
    vec![
        ("Baseline cost", format_currency_short(result.baseline_cost)),
        ("New cost", format_currency_short(result.new_cost)),
        ("Savings", format_currency_short(result.savings)),
        ("Platform cost", format_currency_short(result.platform_cost)),
        ("ROI (Savings / Platform)", format!("{:.2}", result.roi)),
        ("Payback (months)", format!("{:.1}", result.payback_months)),
    ]
}

fn render_table(result: &RoiResult) -> String {
    let rows = result_rows(result);
    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (name, value) in rows {
        out.push_str(&format!("{name:<width$}  {value:>14}\n"));
    }
    out.push('\n');
    out.push_str(&format!(
        "Savings {}  |  ROI {}  |  Payback {}\n",
        format_currency_short(result.savings),
        format_multiple(result.roi),
        format_months(result.payback_months)
    ));
    out
}

/// Compute `scenario` and render it in `format`
pub fn render_report(scenario: &RoiScenario, format: ReportFormat) -> Result<String, ReportError> {
    let result = compute(scenario);
    tracing::info!(?format, savings = result.savings, roi = result.roi, "Rendering report");

    match format {
        ReportFormat::Table => Ok(render_table(&result)),
        ReportFormat::Csv => to_csv(&result).map_err(ReportError::Export),
        ReportFormat::Json => {
            let report = JsonReport {
                scenario,
                result: &result,
            };
            serde_json::to_string_pretty(&report)
                .map(|json| json + "\n")
                .map_err(ReportError::Json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_report() {
        let output = render_report(&RoiScenario::default(), ReportFormat::Table).unwrap();

        assert!(output.contains("Baseline cost"));
        assert!(output.contains("$5,000,000"));
        assert!(output.contains("$4,800,000"));
        assert!(output.contains("0.33"));
        assert!(output.contains("36.0"));
        assert!(output.contains("Savings $200,000  |  ROI 0.33x  |  Payback 36.0 months"));
    }

    #[test]
    fn test_csv_report_matches_export() {
        let scenario = RoiScenario::default();
        let output = render_report(&scenario, ReportFormat::Csv).unwrap();
        assert_eq!(output, to_csv(&compute(&scenario)).unwrap());
    }

    #[test]
    fn test_json_report() {
        let output = render_report(&RoiScenario::default(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["scenario"]["platform_cost"], 600_000.0);
        assert_eq!(value["result"]["throughput_multiplier"], 1.25);
        assert!(value["result"]["payback_months"].as_f64().is_some());
    }

    #[test]
    fn test_result_rows_round_ratios() {
        let result = compute(&RoiScenario {
            platform_cost: 400_000.0,
            ..RoiScenario::default()
        });
        let rows = result_rows(&result);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[4], ("ROI (Savings / Platform)", "1.00".to_string()));
        assert_eq!(rows[5], ("Payback (months)", "12.0".to_string()));
    }
}
