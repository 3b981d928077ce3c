use crate::alerts::types::{AlertRecord, AlertStatus, Severity};

/// Criteria for selecting alerts. Unset fields match everything.
#[derive(Debug, Default, Clone)]
pub struct AlertFilter {
    pub severity: Option<Severity>,
    pub status: Option<AlertStatus>,
    pub source: Option<String>,
    pub district_id: Option<String>,
}

impl AlertFilter {
    pub fn matches(&self, alert: &AlertRecord) -> bool {
        self.severity.is_none_or(|s| alert.severity == s)
            && self.status.is_none_or(|s| alert.status == s)
            && self.source.as_deref().is_none_or(|s| alert.source == s)
            && self
                .district_id
                .as_deref()
                .is_none_or(|d| alert.district_id == d)
    }

    pub fn apply<'a>(&self, alerts: &'a [AlertRecord]) -> Vec<&'a AlertRecord> {
        alerts.iter().filter(|a| self.matches(a)).collect()
    }
}
