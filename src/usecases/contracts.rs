use anyhow::Result;
use chrono::{DateTime, Local};

use crate::domain::{dashboard_state::DashboardState, events::AppEvent};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait DashboardOrchestrator {
    fn state(&self) -> &DashboardState;
    fn state_mut(&mut self) -> &mut DashboardState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Source of case creation timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Local> {
        (*self).now()
    }
}
