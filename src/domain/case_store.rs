//! Append-only case table with filtered views and per-member counts.

use std::collections::BTreeSet;

use super::case::{Case, CaseStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseStore {
    cases: Vec<Case>,
}

impl CaseStore {
    pub fn append(&mut self, case: Case) {
        self.cases.push(case);
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Cases matching `filter`, in insertion order.
    pub fn filter<'a>(&'a self, filter: &'a CaseFilter) -> impl Iterator<Item = &'a Case> + 'a {
        self.cases.iter().filter(move |case| filter.matches(case))
    }
}

/// Membership constraints for a case view. An empty set does not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFilter {
    members: BTreeSet<String>,
    statuses: BTreeSet<CaseStatus>,
}

impl CaseFilter {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(
        members: impl IntoIterator<Item = impl Into<String>>,
        statuses: impl IntoIterator<Item = CaseStatus>,
    ) -> Self {
        Self {
            members: members.into_iter().map(Into::into).collect(),
            statuses: statuses.into_iter().collect(),
        }
    }

    pub fn members(&self) -> &BTreeSet<String> {
        &self.members
    }

    pub fn statuses(&self) -> &BTreeSet<CaseStatus> {
        &self.statuses
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.statuses.is_empty()
    }

    pub fn matches(&self, case: &Case) -> bool {
        (self.members.is_empty() || self.members.contains(&case.assigned_to))
            && (self.statuses.is_empty() || self.statuses.contains(&case.status))
    }

    /// Adds or removes a member constraint. Returns true when now constrained.
    pub fn toggle_member(&mut self, member: &str) -> bool {
        if self.members.remove(member) {
            false
        } else {
            self.members.insert(member.to_owned());
            true
        }
    }

    /// Drops a member constraint, e.g. after the member left the team.
    pub fn remove_member(&mut self, member: &str) -> bool {
        self.members.remove(member)
    }

    /// Adds or removes a status constraint. Returns true when now constrained.
    pub fn toggle_status(&mut self, status: CaseStatus) -> bool {
        if self.statuses.remove(&status) {
            false
        } else {
            self.statuses.insert(status);
            true
        }
    }

    pub fn clear(&mut self) {
        self.members.clear();
        self.statuses.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberLoad {
    pub member: String,
    pub count: usize,
}

/// Per-member case counts, highest first; ties keep first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkloadSummary {
    entries: Vec<MemberLoad>,
}

impl WorkloadSummary {
    pub fn entries(&self) -> &[MemberLoad] {
        &self.entries
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn count_for(&self, member: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.member == member)
            .map_or(0, |entry| entry.count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn count_by_member<'a>(view: impl IntoIterator<Item = &'a Case>) -> WorkloadSummary {
    let mut entries: Vec<MemberLoad> = Vec::new();

    for case in view {
        match entries
            .iter()
            .position(|entry| entry.member == case.assigned_to)
        {
            Some(index) => entries[index].count += 1,
            None => entries.push(MemberLoad {
                member: case.assigned_to.clone(),
                count: 1,
            }),
        }
    }

    // Stable sort keeps first-appearance order among equal counts.
    entries.sort_by(|left, right| right.count.cmp(&left.count));
    WorkloadSummary { entries }
}
