//! Terminal output formatter

use super::RankReport;

pub fn format_reports(reports: &[RankReport]) -> String {
    let mut output = String::new();

    for report in reports {
        output.push_str(&report.label());
        output.push('\n');
        for (page, rank) in report.ranks.iter() {
            output.push_str(&format!("  {}: {:.4}\n", page, rank));
        }
    }

    output
}
