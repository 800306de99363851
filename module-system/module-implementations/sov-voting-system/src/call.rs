use anyhow::Context as _;
use sov_modules_core::{CallResponse, Context};
use tracing::debug;

use crate::types::{Candidate, CandidateId, ElectionState, VoteReceipt};
use crate::{ElectionLedger, VotingError};

/// Call actions supported by the module.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    borsh::BorshDeserialize,
    borsh::BorshSerialize,
    Debug,
    PartialEq,
    Eq,
    Clone,
)]
pub enum CallMessage {
    /// Registers a new candidate. Must be sent by the admin.
    AddCandidate {
        /// Display name; duplicates are allowed.
        name: String,
    },
    /// Casts the sender's single vote.
    Vote {
        /// Id of the chosen candidate.
        candidate_id: CandidateId,
    },
}

impl<C: Context> ElectionLedger<C> {
    /// Appends a candidate with a zero tally and returns its id. Must be called by the admin.
    pub fn add_candidate(
        &self,
        name: String,
        context: &C,
        state: &mut ElectionState<C::Address>,
    ) -> Result<CandidateId, VotingError> {
        self.exit_if_not_admin(context, state)?;

        if name.trim().is_empty() {
            return Err(VotingError::EmptyCandidateName);
        }

        let id = state.candidates.len() as CandidateId;
        debug!(id, %name, "Registering candidate");
        state.candidates.push(Candidate::new(id, name));

        Ok(id)
    }

    /// Records a vote of `voter` for `candidate_id`.
    ///
    /// Checks, in order: the cap, the voter's record, the candidate id. Every
    /// check and every counter increment is validated before the state is
    /// touched, so a rejected vote leaves no trace.
    pub fn vote(
        &self,
        candidate_id: CandidateId,
        voter: &C::Address,
        state: &mut ElectionState<C::Address>,
    ) -> Result<VoteReceipt, VotingError> {
        if state.total_votes_cast >= state.max_voters {
            return Err(VotingError::CapacityExceeded);
        }

        if state.voting_record.contains(voter) {
            return Err(VotingError::AlreadyVoted);
        }

        let candidate_count = state.candidates.len() as u64;
        let candidate = usize::try_from(candidate_id)
            .ok()
            .and_then(|index| state.candidates.get_mut(index))
            .ok_or(VotingError::InvalidCandidate {
                id: candidate_id,
                count: candidate_count,
            })?;

        let vote_count = candidate
            .vote_count()
            .checked_add(1)
            .ok_or(VotingError::VoteCountOverflow)?;
        let total_votes_cast = state
            .total_votes_cast
            .checked_add(1)
            .ok_or(VotingError::VoteCountOverflow)?;

        candidate.set_vote_count(vote_count);
        state.voting_record.insert(voter.clone());
        state.total_votes_cast = total_votes_cast;

        let phase = state.phase();
        debug!(%voter, candidate_id, vote_count, total_votes_cast, ?phase, "Vote accepted");

        Ok(VoteReceipt {
            candidate_id,
            vote_count,
            total_votes_cast,
            phase,
        })
    }

    pub(crate) fn call_add_candidate(
        &self,
        name: String,
        context: &C,
        state: &mut ElectionState<C::Address>,
    ) -> anyhow::Result<CallResponse> {
        let id = self
            .add_candidate(name.clone(), context, state)
            .with_context(|| {
                format!(
                    "Failed to add candidate {name:?} by sender {}",
                    context.sender()
                )
            })?;

        let mut response = CallResponse::default();
        response.add_event(
            "Election: add_candidate",
            &format!("Candidate {id} was added: {name}"),
        );
        Ok(response)
    }

    pub(crate) fn call_vote(
        &self,
        candidate_id: CandidateId,
        context: &C,
        state: &mut ElectionState<C::Address>,
    ) -> anyhow::Result<CallResponse> {
        let receipt = self
            .vote(candidate_id, context.sender(), state)
            .with_context(|| {
                format!(
                    "Failed to vote for candidate {candidate_id} by sender {}",
                    context.sender()
                )
            })?;

        let mut response = CallResponse::default();
        response.add_event(
            "Election: vote",
            &format!(
                "Vote from: {} accepted, candidate {} has {} votes",
                context.sender(),
                receipt.candidate_id,
                receipt.vote_count
            ),
        );
        Ok(response)
    }

    fn exit_if_not_admin(
        &self,
        context: &C,
        state: &ElectionState<C::Address>,
    ) -> Result<(), VotingError> {
        match &state.admin {
            Some(admin) if admin == context.sender() => Ok(()),
            _ => Err(VotingError::NotAdmin),
        }
    }
}
