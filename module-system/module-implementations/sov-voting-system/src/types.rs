use std::collections::HashSet;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::MAX_VOTERS;

/// Position of a candidate in registration order.
pub type CandidateId = u64;

/// A registered candidate and its running tally.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct Candidate {
    id: CandidateId,
    name: String,
    vote_count: u64,
}

impl Candidate {
    pub(crate) fn new(id: CandidateId, name: String) -> Self {
        Self {
            id,
            name,
            vote_count: 0,
        }
    }

    /// Id assigned at registration.
    pub fn id(&self) -> CandidateId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of accepted votes.
    pub fn vote_count(&self) -> u64 {
        self.vote_count
    }

    pub(crate) fn set_vote_count(&mut self, vote_count: u64) {
        self.vote_count = vote_count;
    }
}

/// Whether the election still accepts votes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub enum Phase {
    /// Fewer than `max_voters` votes have been cast.
    Open,
    /// The cap was reached; votes are rejected from now on.
    Closed,
}

/// Confirmation of an accepted vote.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct VoteReceipt {
    /// Candidate that received the vote.
    pub candidate_id: CandidateId,
    /// The candidate's tally including this vote.
    pub vote_count: u64,
    /// Election-wide total including this vote.
    pub total_votes_cast: u64,
    /// Phase after the vote was applied.
    pub phase: Phase,
}

/// Everything the election knows. Owned by the caller and handed to
/// [`crate::ElectionLedger`] by reference.
///
/// `total_votes_cast` always equals both the sum of the candidate tallies and
/// the size of the voting record.
#[derive(Debug, Clone)]
pub struct ElectionState<A> {
    pub(crate) admin: Option<A>,
    pub(crate) candidates: Vec<Candidate>,
    pub(crate) voting_record: HashSet<A>,
    pub(crate) total_votes_cast: u64,
    pub(crate) max_voters: u64,
}

impl<A> Default for ElectionState<A> {
    fn default() -> Self {
        Self {
            admin: None,
            candidates: Vec::new(),
            voting_record: HashSet::new(),
            total_votes_cast: 0,
            max_voters: MAX_VOTERS,
        }
    }
}

impl<A> ElectionState<A> {
    pub(crate) fn phase(&self) -> Phase {
        if self.total_votes_cast < self.max_voters {
            Phase::Open
        } else {
            Phase::Closed
        }
    }
}
