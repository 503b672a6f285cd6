//! Fixed display data shown after a successful login. These records have no
//! identity or lifecycle; the controller never produces or mutates them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    pub time_ago: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub icon: String,
    pub label: String,
}

fn stat(label: &str, value: &str, change: &str, trend: Trend) -> DashboardStat {
    DashboardStat {
        label: label.into(),
        value: value.into(),
        change: change.into(),
        trend,
    }
}

pub fn fixed_stats() -> Vec<DashboardStat> {
    vec![
        stat("Total Users", "2,543", "+12.5%", Trend::Up),
        stat("Revenue", "$45,231", "+8.2%", Trend::Up),
        stat("Active Sessions", "892", "-3.1%", Trend::Down),
        stat("Conversions", "156", "+18.4%", Trend::Up),
    ]
}

fn activity(action: &str, time_ago: &str, icon: &str) -> ActivityEntry {
    ActivityEntry {
        action: action.into(),
        time_ago: time_ago.into(),
        icon: icon.into(),
    }
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        activity("New user registered", "2 minutes ago", "\u{1f464}"),
        activity("Report generated", "15 minutes ago", "\u{1f4ca}"),
        activity("Data export completed", "1 hour ago", "\u{1f4e5}"),
        activity("System backup successful", "3 hours ago", "\u{1f4be}"),
    ]
}

pub fn quick_actions() -> Vec<QuickAction> {
    [
        ("\u{1f4c8}", "View Reports"),
        ("\u{2699}\u{fe0f}", "Settings"),
        ("\u{1f465}", "Manage Users"),
        ("\u{1f4e7}", "Send Notification"),
    ]
    .into_iter()
    .map(|(icon, label)| QuickAction {
        icon: icon.into(),
        label: label.into(),
    })
    .collect()
}
