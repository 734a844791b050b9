//! Ballot box — screens ballots against the registry and the ledger.
//!
//! A ballot is sealed only after the voter is found, their registration is
//! active, and neither the registry nor the ledger has a vote on record for
//! them. The ledger check is the second line of defense: it holds even if
//! the registry's flag was lost.

use std::sync::Arc;

use serde::Serialize;
use votechain_ledger::{Block, ChainSnapshot, SharedLedger, VoteCount};
use votechain_registry::{Voter, VoterRegistry};
use votechain_types::Vote;

use crate::{LedgerService, NodeConfig, NodeError};

/// Registered-versus-voted counts from the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Turnout {
    pub registered: usize,
    pub voted: usize,
}

pub struct BallotBox {
    registry: VoterRegistry,
    service: LedgerService,
    candidates: Vec<String>,
}

impl BallotBox {
    pub fn new(registry: VoterRegistry, service: LedgerService, candidates: Vec<String>) -> Self {
        Self {
            registry,
            service,
            candidates,
        }
    }

    /// Build the registry from the configured roster and seal a fresh ledger.
    pub fn from_config(config: &NodeConfig) -> Result<Self, NodeError> {
        let mut registry = VoterRegistry::new();
        for entry in &config.voters {
            registry.register(entry.id.clone(), entry.name.clone())?;
        }

        let ledger = Arc::new(SharedLedger::new(config.ledger.clone())?);
        let service = LedgerService::new(ledger, config.append_timeout());
        Ok(Self::new(registry, service, config.candidates.clone()))
    }

    /// Check that `voter_id` may vote right now.
    pub fn check_voter(&self, voter_id: &str) -> Result<&Voter, NodeError> {
        if voter_id.is_empty() {
            return Err(NodeError::MissingVoterId);
        }
        let voter = self
            .registry
            .get(voter_id)
            .ok_or_else(|| NodeError::UnknownVoter(voter_id.to_string()))?;
        if !voter.registered {
            return Err(NodeError::RegistrationInactive(voter_id.to_string()));
        }
        if voter.has_voted || self.service.has_voted(voter_id) {
            return Err(NodeError::AlreadyVoted(voter_id.to_string()));
        }
        Ok(voter)
    }

    /// Screen and seal one ballot, then mark the voter in the registry.
    pub async fn cast(&mut self, voter_id: &str, candidate: &str) -> Result<Block, NodeError> {
        self.check_voter(voter_id)?;
        if !self.candidates.is_empty() && !self.candidates.iter().any(|c| c == candidate) {
            return Err(NodeError::UnknownCandidate(candidate.to_string()));
        }

        let block = self.service.append(Vote::new(voter_id, candidate)).await?;
        self.registry.mark_as_voted(voter_id);
        tracing::info!(
            voter = voter_id,
            candidate,
            index = block.index,
            hash = %block.hash,
            "ballot accepted"
        );
        Ok(block)
    }

    /// Ledger tally with every ballot candidate present, defaulting to zero.
    pub fn tally(&self) -> VoteCount {
        let mut counts = self.service.vote_count();
        for candidate in &self.candidates {
            counts.entry(candidate.clone()).or_insert(0);
        }
        counts
    }

    pub fn turnout(&self) -> Turnout {
        Turnout {
            registered: self.registry.registered_count(),
            voted: self.registry.voted_count(),
        }
    }

    pub fn validate(&self) -> Result<bool, NodeError> {
        self.service.validate()
    }

    pub fn chain(&self) -> ChainSnapshot {
        self.service.snapshot()
    }

    pub fn registry(&self) -> &VoterRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut VoterRegistry {
        &mut self.registry
    }
}
