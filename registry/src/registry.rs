//! Voter registry — register voters and track their eligibility.

use crate::error::RegistryError;
use crate::types::Voter;
use std::collections::HashMap;

/// Registry of known voters, listed in registration order.
pub struct VoterRegistry {
    voters: HashMap<String, Voter>,
    order: Vec<String>,
}

impl VoterRegistry {
    pub fn new() -> Self {
        Self {
            voters: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a new voter. Registering an existing ID is rejected.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Voter, RegistryError> {
        let id = id.into();
        if self.voters.contains_key(&id) {
            return Err(RegistryError::DuplicateVoter(id));
        }

        let voter = Voter {
            id: id.clone(),
            name: name.into(),
            registered: true,
            has_voted: false,
        };
        tracing::debug!(voter = %id, "voter registered");
        self.voters.insert(id.clone(), voter.clone());
        self.order.push(id);
        Ok(voter)
    }

    /// Look up a voter by ID.
    pub fn get(&self, id: &str) -> Option<&Voter> {
        self.voters.get(id)
    }

    /// Whether the voter exists and their registration is active.
    pub fn is_registered(&self, id: &str) -> bool {
        self.voters.get(id).is_some_and(|v| v.registered)
    }

    /// Deactivate a registration without forgetting the voter.
    pub fn deregister(&mut self, id: &str) -> Result<(), RegistryError> {
        let voter = self
            .voters
            .get_mut(id)
            .ok_or_else(|| RegistryError::VoterNotFound(id.to_string()))?;
        voter.registered = false;
        Ok(())
    }

    /// Record that the voter's ballot was accepted. Unknown IDs are ignored.
    pub fn mark_as_voted(&mut self, id: &str) {
        if let Some(voter) = self.voters.get_mut(id) {
            voter.has_voted = true;
        }
    }

    /// Whether the registry has recorded a vote for this voter.
    pub fn has_voted(&self, id: &str) -> bool {
        self.voters.get(id).is_some_and(|v| v.has_voted)
    }

    /// All voters in registration order.
    pub fn voters(&self) -> Vec<&Voter> {
        self.order.iter().filter_map(|id| self.voters.get(id)).collect()
    }

    pub fn registered_count(&self) -> usize {
        self.voters.values().filter(|v| v.registered).count()
    }

    pub fn voted_count(&self) -> usize {
        self.voters.values().filter(|v| v.has_voted).count()
    }
}

impl Default for VoterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> VoterRegistry {
        let mut registry = VoterRegistry::new();
        registry.register("V001", "John Doe").unwrap();
        registry.register("V002", "Jane Smith").unwrap();
        registry
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = registry();
        let err = registry.register("V001", "Someone Else").unwrap_err();
        assert_eq!(err, RegistryError::DuplicateVoter("V001".into()));
        assert_eq!(registry.get("V001").unwrap().name, "John Doe");
    }

    #[test]
    fn new_voters_are_registered_and_have_not_voted() {
        let registry = registry();
        assert!(registry.is_registered("V001"));
        assert!(!registry.has_voted("V001"));
        assert!(!registry.is_registered("V999"));
        assert_eq!(registry.registered_count(), 2);
        assert_eq!(registry.voted_count(), 0);
    }

    #[test]
    fn mark_as_voted_updates_counts() {
        let mut registry = registry();
        registry.mark_as_voted("V002");
        registry.mark_as_voted("V999");
        assert!(registry.has_voted("V002"));
        assert!(!registry.has_voted("V999"));
        assert_eq!(registry.voted_count(), 1);
    }

    #[test]
    fn deregister_keeps_voter_but_deactivates() {
        let mut registry = registry();
        registry.deregister("V001").unwrap();
        assert!(!registry.is_registered("V001"));
        assert!(registry.get("V001").is_some());
        assert_eq!(registry.registered_count(), 1);
        assert!(matches!(
            registry.deregister("V404"),
            Err(RegistryError::VoterNotFound(_))
        ));
    }

    #[test]
    fn voters_are_listed_in_registration_order() {
        let mut registry = registry();
        registry.register("A000", "Early Alphabet").unwrap();
        let ids: Vec<_> = registry.voters().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["V001", "V002", "A000"]);
    }
}
