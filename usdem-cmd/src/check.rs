//! `check` subcommand.

use usdem_db::{ConsistencyIssue, Dataset};

/// Human-readable report, one issue per line.
pub fn render_report(issues: &[ConsistencyIssue]) -> String {
    if issues.is_empty() {
        return "No consistency issues found\n".to_string();
    }
    let mut out = format!("{} consistency issue(s):\n", issues.len());
    for issue in issues {
        out.push_str(&format!("  - {}\n", issue));
    }
    out
}

/// Print the report; fails when any issue exists so scripts can gate on it.
pub fn run_check(dataset: &Dataset, tolerance: f64) -> anyhow::Result<()> {
    let issues = dataset.consistency_issues(tolerance)?;
    print!("{}", render_report(&issues));
    if issues.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} consistency issue(s) found", issues.len())
    }
}
