use serde::{Deserialize, Serialize};
use std::fmt;

use super::TaskId;

/// A unit of work in the workflow planner. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub duration_days: u32,
}

impl Task {
    pub(crate) fn new(id: TaskId, name: impl Into<String>, duration_days: u32) -> Self {
        Self {
            id,
            name: name.into(),
            duration_days,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({} d)", self.id, self.name, self.duration_days)
    }
}
