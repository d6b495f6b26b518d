use std::path::PathBuf;

use serde::Deserialize;

use crate::{
    domain::{assignment::AssignmentMode, case::CaseStatus},
    infra::config::{AppConfig, AssignmentConfig, LogConfig, TeamConfig},
};

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub team: Option<FileTeamConfig>,
    pub assignment: Option<FileAssignmentConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(team) = self.team {
            team.merge_into(&mut config.team);
        }

        if let Some(assignment) = self.assignment {
            assignment.merge_into(&mut config.assignment);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub directory: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(directory) = self.directory {
            config.directory = Some(directory);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileTeamConfig {
    pub members: Option<Vec<String>>,
    pub working_today: Option<Vec<String>>,
}

impl FileTeamConfig {
    fn merge_into(self, config: &mut TeamConfig) {
        if let Some(members) = self.members {
            config.members = members;
        }

        if let Some(working_today) = self.working_today {
            config.working_today = Some(working_today);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileAssignmentConfig {
    pub mode: Option<AssignmentMode>,
    pub default_status: Option<CaseStatus>,
}

impl FileAssignmentConfig {
    fn merge_into(self, config: &mut AssignmentConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }

        if let Some(status) = self.default_status {
            config.default_status = status;
        }
    }
}
