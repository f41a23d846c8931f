//! Completion filter and the filtered-view projection.

use std::str::FromStr;

use serde::Deserialize;

use crate::task::Task;

/// Which tasks the board shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Tasks with `done == true`.
    Completed,
    /// Tasks with `done == false`.
    Pending,
}

impl Filter {
    /// All filters in display order.
    pub const ALL: [Self; 3] = [Self::All, Self::Completed, Self::Pending];

    /// Whether `task` passes this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.done,
            Self::Pending => !task.done,
        }
    }

    /// Projects `tasks` through this filter, keeping relative order.
    ///
    /// The result borrows from `tasks`, so it cannot outlive a change to
    /// the collection it was computed from.
    #[must_use]
    pub fn apply(self, tasks: &[Task]) -> Vec<&Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Completed => write!(f, "Completed"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

/// Returned when a string does not name a filter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter {0:?} (expected all, completed or pending)")]
pub struct FilterParseError(pub String);

impl FromStr for Filter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" | "done" => Ok(Self::Completed),
            "pending" | "todo" => Ok(Self::Pending),
            _ => Err(FilterParseError(s.to_string())),
        }
    }
}
