use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CouncilError;

/// Where the external election service says the election currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionStatus {
    #[default]
    Pending,
    Running,
    Completed,
}

impl ElectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElectionStatus::Pending => "pending",
            ElectionStatus::Running => "running",
            ElectionStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ElectionStatus::Pending => "Pending",
            ElectionStatus::Running => "Running",
            ElectionStatus::Completed => "Completed",
        }
    }

    pub fn all() -> &'static [ElectionStatus] {
        &[
            ElectionStatus::Pending,
            ElectionStatus::Running,
            ElectionStatus::Completed,
        ]
    }
}

impl fmt::Display for ElectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElectionStatus {
    type Err = CouncilError;

    /// Wire values are matched exactly; anything else is not a status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ElectionStatus::Pending),
            "running" => Ok(ElectionStatus::Running),
            "completed" => Ok(ElectionStatus::Completed),
            other => Err(CouncilError::UnknownStatus(other.to_string())),
        }
    }
}
