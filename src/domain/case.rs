use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a case. Set once at creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl CaseStatus {
    #[cfg_attr(not(test), allow(dead_code))]
    pub const ALL: [CaseStatus; 3] = [Self::Open, Self::InProgress, Self::Closed];

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }

    /// Next status in display order, wrapping around. Used by the status picker.
    pub fn cycle(self) -> Self {
        match self {
            Self::Open => Self::InProgress,
            Self::InProgress => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub case_id: String,
    /// Name of the member at assignment time; may no longer be in the team.
    pub assigned_to: String,
    pub created_at: DateTime<Local>,
    pub status: CaseStatus,
}

impl Case {
    pub fn created_at_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn status_labels_match_badges() {
        let labels: Vec<_> = CaseStatus::ALL.iter().map(|s| s.as_label()).collect();

        assert_eq!(labels, ["Open", "In Progress", "Closed"]);
    }

    #[test]
    fn cycle_wraps_back_to_open() {
        assert_eq!(CaseStatus::Open.cycle(), CaseStatus::InProgress);
        assert_eq!(CaseStatus::Closed.cycle(), CaseStatus::Open);
    }

    #[test]
    fn status_deserializes_from_snake_case() {
        #[derive(Deserialize)]
        struct Holder {
            status: CaseStatus,
        }

        let holder: Holder = toml::from_str("status = \"in_progress\"").expect("must parse");

        assert_eq!(holder.status, CaseStatus::InProgress);
    }

    #[test]
    fn created_at_label_uses_dashboard_format() {
        let created_at = Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .expect("fixture time is unambiguous");
        let case = Case {
            case_id: "C1".to_owned(),
            assigned_to: "Alice".to_owned(),
            created_at,
            status: CaseStatus::Open,
        };

        assert_eq!(case.created_at_label(), "2024-03-09 14:05:07");
    }
}
