//! Dashboard headline figures and notification ticker entries.

use serde::{Deserialize, Serialize};

/// Direction of a headline figure's change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// A headline figure on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Student,
    Course,
    Teacher,
}

/// An entry of the rotating notification ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub name: String,
    pub time: String,
}
