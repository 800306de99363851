use serde::{Deserialize, Serialize};
use sov_modules_core::Context;

use crate::types::{Candidate, CandidateId, ElectionState, Phase};
use crate::{ElectionLedger, VotingError};

/// Snapshot of the whole tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionResults {
    /// Every candidate in registration order.
    pub candidates: Vec<Candidate>,
    /// Number of accepted votes.
    pub total_votes_cast: u64,
    /// Cap on the total number of votes.
    pub max_voters: u64,
    /// Whether votes are still accepted.
    pub phase: Phase,
    /// `None` only while no candidate is registered.
    pub winner: Option<Candidate>,
}

impl<C: Context> ElectionLedger<C> {
    /// Name and tally of a single candidate.
    pub fn candidate_details(
        &self,
        candidate_id: CandidateId,
        state: &ElectionState<C::Address>,
    ) -> Result<Candidate, VotingError> {
        usize::try_from(candidate_id)
            .ok()
            .and_then(|index| state.candidates.get(index))
            .cloned()
            .ok_or(VotingError::InvalidCandidate {
                id: candidate_id,
                count: state.candidates.len() as u64,
            })
    }

    /// Whether `voter` has a recorded vote. Unknown identities have not voted.
    pub fn has_voted(&self, voter: &C::Address, state: &ElectionState<C::Address>) -> bool {
        state.voting_record.contains(voter)
    }

    /// The candidate with the greatest tally. Among candidates sharing the
    /// maximum, the one with the lowest id wins.
    pub fn winner(&self, state: &ElectionState<C::Address>) -> Result<Candidate, VotingError> {
        state
            .candidates
            .iter()
            .reduce(|best, candidate| {
                if candidate.vote_count() > best.vote_count() {
                    candidate
                } else {
                    best
                }
            })
            .cloned()
            .ok_or(VotingError::NoCandidates)
    }

    /// All candidates in registration order.
    pub fn candidates(&self, state: &ElectionState<C::Address>) -> Vec<Candidate> {
        state.candidates.clone()
    }

    /// Number of accepted votes.
    pub fn total_votes_cast(&self, state: &ElectionState<C::Address>) -> u64 {
        state.total_votes_cast
    }

    /// Cap installed at genesis.
    pub fn max_voters(&self, state: &ElectionState<C::Address>) -> u64 {
        state.max_voters
    }

    /// Current phase of the election.
    pub fn phase(&self, state: &ElectionState<C::Address>) -> Phase {
        state.phase()
    }

    /// The whole tally at once, including the current winner if any.
    pub fn results(&self, state: &ElectionState<C::Address>) -> ElectionResults {
        ElectionResults {
            candidates: self.candidates(state),
            total_votes_cast: state.total_votes_cast,
            max_voters: state.max_voters,
            phase: state.phase(),
            winner: self.winner(state).ok(),
        }
    }
}
