use serde::{Deserialize, Serialize};

/// Sentinel stored in `minutes` when the plan has unlimited calling.
pub const UNLIMITED_MINUTES: i64 = -1;

/// One mobile plan as read off the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub name: Option<String>,
    pub price: Option<String>,
    /// Data allowance token, lower-cased (e.g. `"10gb"`).
    pub internet: Option<String>,
    /// Minute allowance, or [`UNLIMITED_MINUTES`].
    pub minutes: Option<i64>,
    pub benefits: Vec<String>,
}

impl PlanRecord {
    pub fn has_unlimited_minutes(&self) -> bool {
        self.minutes == Some(UNLIMITED_MINUTES)
    }

    /// Minutes rendered for display: "unlimited", "120 min" or "-".
    pub fn minutes_label(&self) -> String {
        if self.has_unlimited_minutes() {
            return "unlimited".to_string();
        }
        match self.minutes {
            Some(n) => format!("{} min", n),
            None => "-".to_string(),
        }
    }
}
