use serde::Serialize;
use serde_json::Value;

/// One submission that was flagged as having issues, normalized for reporting.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    pub id: Value,
    pub form_id: Value,
    pub date_submitted: Value,
    pub location: Value,
    pub issue_type: Value,
    pub description: Value,
    pub photos: Value,
    pub priority: Value,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub report_date: String,
    pub total_issues: usize,
    pub issues: Vec<IssueRecord>,
}

impl IssueRecord {
    /// Project a backend submission into an issue record.
    ///
    /// Returns `None` unless `data.hasIssues` is exactly the boolean `true`.
    /// Defaults only fill keys that are absent; present values pass through.
    pub fn from_submission(submission: &Value) -> Option<Self> {
        let data = submission.get("data")?;
        if data.get("hasIssues") != Some(&Value::Bool(true)) {
            return None;
        }

        let meta = |key: &str| submission.get(key).cloned().unwrap_or(Value::Null);
        let field = |key: &str, default: Value| data.get(key).cloned().unwrap_or(default);

        Some(Self {
            id: meta("_id"),
            form_id: meta("form"),
            date_submitted: meta("created"),
            location: field("location", Value::from("Unknown")),
            issue_type: field("issueType", Value::from("Unknown")),
            description: field("issueDescription", Value::from("")),
            photos: field("issuePhotos", Value::Array(Vec::new())),
            priority: field("issuePriority", Value::from("Medium")),
            status: "Open".to_string(),
        })
    }
}
