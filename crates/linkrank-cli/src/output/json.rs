//! JSON output formatter

use super::{Estimator, RankReport};

pub fn format_reports(reports: &[RankReport]) -> String {
    let output: Vec<serde_json::Value> = reports
        .iter()
        .map(|r| {
            let mut value = serde_json::json!({
                "label": r.label(),
                "method": r.estimator.as_str(),
                "ranks": r.ranks,
            });
            match r.estimator {
                Estimator::Sampling { samples } => value["samples"] = samples.into(),
                Estimator::Iteration { rounds } => value["rounds"] = rounds.into(),
            }
            value
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string()) + "\n"
}
