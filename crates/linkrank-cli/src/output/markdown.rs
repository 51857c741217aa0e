//! Markdown output formatter

use super::RankReport;

pub fn format_reports(reports: &[RankReport]) -> String {
    let mut output = String::new();

    for report in reports {
        output.push_str(&format!("## {}\n\n", report.label()));
        output.push_str("| Page | Rank |\n");
        output.push_str("|------|------|\n");
        for (page, rank) in report.ranks.iter() {
            output.push_str(&format!("| `{}` | {:.4} |\n", page, rank));
        }
        output.push('\n');
    }

    if reports.is_empty() {
        output.push_str("*No results*\n");
    }

    output
}
