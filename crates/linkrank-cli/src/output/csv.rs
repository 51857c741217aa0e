//! CSV output formatter

use super::RankReport;

pub fn format_reports(reports: &[RankReport]) -> String {
    let mut output = String::from("method,page,rank\n");

    for report in reports {
        for (page, rank) in report.ranks.iter() {
            output.push_str(&format!(
                "{},{},{:.4}\n",
                report.estimator.as_str(),
                escape_csv(page),
                rank
            ));
        }
    }

    output
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures;

    #[test]
    fn test_csv_rows() {
        let output = format_reports(&fixtures::reports());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "method,page,rank");
        assert_eq!(lines.len(), 7);
        assert!(lines[1].starts_with("sampling,1.html,"));
        assert!(lines[4].starts_with("iteration,1.html,"));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("a,b.html"), "\"a,b.html\"");
        assert_eq!(escape_csv("plain.html"), "plain.html");
    }
}
