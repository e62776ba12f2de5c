use chrono::Local;
use tracing::info;

use crate::client::FormsBackend;
use crate::error::{AppError, Upstream};
use crate::models::report::{IssueRecord, Report};

/// Build the maintenance report from every submission in the backend.
pub async fn generate_report(backend: &dyn FormsBackend) -> Result<Report, AppError> {
    let submissions = backend.list_submissions().await?;
    let submissions = submissions.as_array().ok_or_else(|| {
        AppError::unparsable(Upstream::FormsBackend, "expected a list of submissions")
    })?;

    let issues: Vec<IssueRecord> = submissions
        .iter()
        .filter_map(IssueRecord::from_submission)
        .collect();

    info!(
        "Report built: {} of {} submissions have issues",
        issues.len(),
        submissions.len()
    );

    Ok(Report {
        report_date: format!("Generated on: {}", Local::now().format("%Y-%m-%d %H:%M:%S")),
        total_issues: issues.len(),
        issues,
    })
}
