use serde::{Deserialize, Serialize};

/// How the next case picks its assignee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentMode {
    /// Rotate over the whole team in insertion order.
    #[default]
    RoundRobin,
    /// Explicit assignee, restricted to members working today.
    Manual,
}

impl AssignmentMode {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::RoundRobin => "Round robin",
            Self::Manual => "Manual",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::RoundRobin => Self::Manual,
            Self::Manual => Self::RoundRobin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_switches_between_modes() {
        assert_eq!(AssignmentMode::RoundRobin.toggled(), AssignmentMode::Manual);
        assert_eq!(AssignmentMode::Manual.toggled(), AssignmentMode::RoundRobin);
    }
}
