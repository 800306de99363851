use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sov_modules_core::{CallResponse, Context, Module, ModuleError};

use crate::query::ElectionResults;
use crate::types::{Candidate, CandidateId, ElectionState, Phase, VoteReceipt};
use crate::{CallMessage, ElectionConfig, ElectionLedger, VotingError};

/// An election that can be shared between threads.
///
/// Mutating calls hold the write lock for their whole duration, so they are
/// applied one at a time in a single total order. Reads share the read lock
/// and always see a state in which every counter agrees.
#[derive(Debug)]
pub struct SharedElection<C: Context> {
    ledger: ElectionLedger<C>,
    state: RwLock<ElectionState<C::Address>>,
}

impl<C: Context> SharedElection<C> {
    /// Runs genesis on a fresh state.
    pub fn new(config: &ElectionConfig<C>) -> Result<Self, ModuleError> {
        let ledger = ElectionLedger::<C>::default();
        let mut state = ElectionState::default();
        ledger.genesis(config, &mut state)?;

        Ok(Self {
            ledger,
            state: RwLock::new(state),
        })
    }

    // Operations validate before they write, so a poisoned lock still guards
    // a consistent state.
    fn read(&self) -> RwLockReadGuard<'_, ElectionState<C::Address>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ElectionState<C::Address>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`ElectionLedger::add_candidate`].
    pub fn add_candidate(
        &self,
        name: impl Into<String>,
        context: &C,
    ) -> Result<CandidateId, VotingError> {
        self.ledger
            .add_candidate(name.into(), context, &mut self.write())
    }

    /// See [`ElectionLedger::vote`].
    pub fn vote(
        &self,
        candidate_id: CandidateId,
        voter: &C::Address,
    ) -> Result<VoteReceipt, VotingError> {
        self.ledger.vote(candidate_id, voter, &mut self.write())
    }

    /// Dispatches a serialized call on behalf of `context.sender()`.
    pub fn call(&self, msg: CallMessage, context: &C) -> Result<CallResponse, ModuleError> {
        self.ledger.call(msg, context, &mut self.write())
    }

    /// See [`ElectionLedger::candidate_details`].
    pub fn candidate_details(&self, candidate_id: CandidateId) -> Result<Candidate, VotingError> {
        self.ledger.candidate_details(candidate_id, &self.read())
    }

    /// See [`ElectionLedger::has_voted`].
    pub fn has_voted(&self, voter: &C::Address) -> bool {
        self.ledger.has_voted(voter, &self.read())
    }

    /// See [`ElectionLedger::winner`].
    pub fn winner(&self) -> Result<Candidate, VotingError> {
        self.ledger.winner(&self.read())
    }

    /// Number of accepted votes.
    pub fn total_votes_cast(&self) -> u64 {
        self.ledger.total_votes_cast(&self.read())
    }

    /// Current phase of the election.
    pub fn phase(&self) -> Phase {
        self.ledger.phase(&self.read())
    }

    /// The whole tally, read under a single lock.
    pub fn results(&self) -> ElectionResults {
        self.ledger.results(&self.read())
    }

    /// Clones the current state. Pass it to the [`ElectionLedger`] reads to
    /// inspect the election without holding the lock.
    pub fn snapshot(&self) -> ElectionState<C::Address> {
        self.read().clone()
    }

    /// The module driving this election.
    pub fn ledger(&self) -> &ElectionLedger<C> {
        &self.ledger
    }
}
