//! Team membership, the "working today" subset, and the round-robin cursor.

use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("Member name must not be empty.")]
    EmptyName,
    #[error("{0} is already in the team.")]
    AlreadyMember(String),
    #[error("{0} is not in the team.")]
    NotAMember(String),
}

/// Ordered set of team members.
///
/// Insertion order drives both the sidebar listing and the round-robin
/// rotation. The working set is always a subset of `members`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRegistry {
    members: Vec<String>,
    working: HashSet<String>,
    next_index: usize,
}

impl TeamRegistry {
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|member| member == name)
    }

    pub fn is_working(&self, name: &str) -> bool {
        self.working.contains(name)
    }

    /// Members marked as working today, in team order.
    pub fn working_members(&self) -> impl Iterator<Item = &str> {
        self.members
            .iter()
            .filter(|member| self.working.contains(member.as_str()))
            .map(String::as_str)
    }

    /// Index of the member the next round-robin assignment will pick.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Appends a new member and returns the normalized name.
    pub fn add(&mut self, name: &str) -> Result<String, TeamError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TeamError::EmptyName);
        }

        if self.contains(name) {
            return Err(TeamError::AlreadyMember(name.to_owned()));
        }

        self.members.push(name.to_owned());
        Ok(name.to_owned())
    }

    pub fn remove(&mut self, name: &str) -> Result<(), TeamError> {
        let name = name.trim();
        let Some(position) = self.members.iter().position(|member| member == name) else {
            return Err(TeamError::NotAMember(name.to_owned()));
        };

        self.members.remove(position);
        self.working.remove(name);

        // Keep the same member next in line when someone ahead of the cursor leaves.
        if position < self.next_index {
            self.next_index -= 1;
        }
        if self.next_index >= self.members.len() {
            self.next_index = 0;
        }

        Ok(())
    }

    pub fn set_working(&mut self, name: &str, working: bool) -> Result<(), TeamError> {
        if !self.contains(name) {
            return Err(TeamError::NotAMember(name.to_owned()));
        }

        if working {
            self.working.insert(name.to_owned());
        } else {
            self.working.remove(name);
        }

        Ok(())
    }

    /// Flips the working-today flag and returns the new value.
    pub fn toggle_working(&mut self, name: &str) -> Result<bool, TeamError> {
        let working = !self.is_working(name);
        self.set_working(name, working)?;
        Ok(working)
    }

    /// Returns the member at the cursor and advances it, wrapping at the end.
    pub fn next_in_rotation(&mut self) -> Option<String> {
        if self.members.is_empty() {
            return None;
        }

        let index = self.next_index % self.members.len();
        self.next_index = (index + 1) % self.members.len();
        Some(self.members[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(names: &[&str]) -> TeamRegistry {
        let mut registry = TeamRegistry::default();
        for name in names {
            registry.add(name).expect("fixture member should be added");
        }
        registry
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let registry = team(&["Alice", "Bob", "Charlie"]);

        assert_eq!(registry.members(), ["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn add_trims_surrounding_whitespace() {
        let mut registry = TeamRegistry::default();

        let added = registry.add("  Dana ").expect("name should be accepted");

        assert_eq!(added, "Dana");
        assert!(registry.contains("Dana"));
    }

    #[test]
    fn duplicate_add_is_rejected_and_leaves_team_unchanged() {
        let mut registry = team(&["Alice", "Bob"]);
        let before = registry.clone();

        let err = registry.add("Alice").expect_err("duplicate must fail");

        assert_eq!(err, TeamError::AlreadyMember("Alice".to_owned()));
        assert_eq!(err.to_string(), "Alice is already in the team.");
        assert_eq!(registry, before);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut registry = TeamRegistry::default();

        assert_eq!(registry.add("   "), Err(TeamError::EmptyName));
        assert!(registry.is_empty());
    }

    #[test]
    fn removing_non_member_is_a_no_op() {
        let mut registry = team(&["Alice", "Bob"]);
        registry.set_working("Bob", true).expect("Bob is a member");
        let before = registry.clone();

        let err = registry.remove("Zed").expect_err("non-member removal must signal");

        assert_eq!(err, TeamError::NotAMember("Zed".to_owned()));
        assert_eq!(registry, before);
    }

    #[test]
    fn remove_also_drops_member_from_working_set() {
        let mut registry = team(&["Alice", "Bob"]);
        registry.set_working("Alice", true).expect("Alice is a member");

        registry.remove("Alice").expect("Alice should be removed");

        assert!(!registry.is_working("Alice"));
        assert_eq!(registry.working_members().count(), 0);
    }

    #[test]
    fn working_set_only_accepts_members() {
        let mut registry = team(&["Alice"]);

        let err = registry
            .set_working("Bob", true)
            .expect_err("non-member cannot be working");

        assert_eq!(err, TeamError::NotAMember("Bob".to_owned()));
        assert!(!registry.is_working("Bob"));
    }

    #[test]
    fn working_members_follow_team_order() {
        let mut registry = team(&["Alice", "Bob", "Charlie"]);
        registry.set_working("Charlie", true).expect("member");
        registry.set_working("Alice", true).expect("member");

        let working: Vec<_> = registry.working_members().collect();

        assert_eq!(working, ["Alice", "Charlie"]);
    }

    #[test]
    fn toggle_working_flips_flag() {
        let mut registry = team(&["Alice"]);

        assert_eq!(registry.toggle_working("Alice"), Ok(true));
        assert_eq!(registry.toggle_working("Alice"), Ok(false));
        assert!(!registry.is_working("Alice"));
    }

    #[test]
    fn rotation_visits_each_member_once_then_wraps() {
        let mut registry = team(&["Alice", "Bob", "Charlie"]);

        let picks: Vec<_> = (0..4).filter_map(|_| registry.next_in_rotation()).collect();

        assert_eq!(picks, ["Alice", "Bob", "Charlie", "Alice"]);
    }

    #[test]
    fn rotation_on_empty_team_yields_nothing() {
        let mut registry = TeamRegistry::default();

        assert_eq!(registry.next_in_rotation(), None);
        assert_eq!(registry.next_index(), 0);
    }

    #[test]
    fn removing_member_before_cursor_keeps_next_member() {
        let mut registry = team(&["Alice", "Bob", "Charlie"]);
        registry.next_in_rotation();
        registry.next_in_rotation();

        registry.remove("Alice").expect("Alice should be removed");

        assert_eq!(registry.next_in_rotation().as_deref(), Some("Charlie"));
    }

    #[test]
    fn removing_last_member_at_cursor_wraps_to_start() {
        let mut registry = team(&["Alice", "Bob", "Charlie"]);
        registry.next_in_rotation();
        registry.next_in_rotation();

        registry.remove("Charlie").expect("Charlie should be removed");

        assert_eq!(registry.next_index(), 0);
        assert_eq!(registry.next_in_rotation().as_deref(), Some("Alice"));
    }

    #[test]
    fn new_member_joins_the_end_of_the_rotation() {
        let mut registry = team(&["Alice", "Bob"]);
        registry.next_in_rotation();
        registry.next_in_rotation();

        registry.add("Charlie").expect("Charlie should be added");

        let picks: Vec<_> = (0..3).filter_map(|_| registry.next_in_rotation()).collect();
        assert_eq!(picks, ["Alice", "Bob", "Charlie"]);
    }
}
