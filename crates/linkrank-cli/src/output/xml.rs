//! XML output formatter

use super::{Estimator, RankReport};

pub fn format_reports(reports: &[RankReport]) -> String {
    let mut output = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<reports>\n");

    for report in reports {
        let attribute = match report.estimator {
            Estimator::Sampling { samples } => format!("samples=\"{}\"", samples),
            Estimator::Iteration { rounds } => format!("rounds=\"{}\"", rounds),
        };
        output.push_str(&format!(
            "  <report method=\"{}\" {}>\n",
            report.estimator.as_str(),
            attribute
        ));
        for (page, rank) in report.ranks.iter() {
            output.push_str(&format!(
                "    <page name=\"{}\" rank=\"{:.4}\"/>\n",
                escape_xml(page),
                rank
            ));
        }
        output.push_str("  </report>\n");
    }

    output.push_str("</reports>\n");
    output
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
