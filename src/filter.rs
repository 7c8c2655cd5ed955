// Display filter over the task collection

use crate::task::Task;
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which subset of tasks is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterState {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterState {
    /// Every filter, in footer order
    pub const ALL: [FilterState; 3] = [FilterState::All, FilterState::Active, FilterState::Completed];

    /// Whether a task is visible under this filter
    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterState::All => true,
            FilterState::Active => !task.is_done,
            FilterState::Completed => task.is_done,
        }
    }
}

impl std::fmt::Display for FilterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterState::All => write!(f, "All"),
            FilterState::Active => write!(f, "Active"),
            FilterState::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for FilterState {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterState::All),
            "active" => Ok(FilterState::Active),
            "completed" => Ok(FilterState::Completed),
            other => Err(eyre!("Unknown filter: {} (expected all, active or completed)", other)),
        }
    }
}
