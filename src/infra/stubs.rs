use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};

use crate::{
    infra::{config::AppConfig, contracts::ConfigAdapter},
    usecases::contracts::Clock,
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Clock pinned to a single instant so case timestamps are predictable.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Local>,
}

impl Default for FixedClock {
    fn default() -> Self {
        let at = Local
            .timestamp_opt(1_700_000_000, 0)
            .single()
            .expect("fixture timestamp is valid");
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock::default();

        assert_eq!(clock.now(), clock.now());
    }
}
