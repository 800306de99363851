//! A single-election vote tally.
//!
//! The module registers candidates, accepts at most one vote per identity,
//! closes automatically once [`MAX_VOTERS`] votes have been cast, and resolves
//! a winner deterministically (ties go to the lowest candidate id).
//!
//! Candidates may be added by the administrator captured at genesis at any
//! point of the election, including after voting has started.
#![deny(missing_docs)]

mod call;
mod error;
mod genesis;
mod query;
mod shared;
mod types;


use std::marker::PhantomData;

pub use call::CallMessage;
pub use error::VotingError;
pub use query::ElectionResults;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
pub use shared::SharedElection;
use sov_modules_core::{CallResponse, Context, Module, ModuleError};
pub use types::{Candidate, CandidateId, ElectionState, Phase, VoteReceipt};

/// Number of votes the election accepts before it closes.
pub const MAX_VOTERS: u64 = 20;

fn default_max_voters() -> u64 {
    MAX_VOTERS
}

/// Initial configuration for the election.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "C::Address: Serialize + DeserializeOwned")]
pub struct ElectionConfig<C: Context> {
    /// The only identity allowed to register candidates.
    pub admin: C::Address,
    /// Cap on the total number of votes.
    #[serde(default = "default_max_voters")]
    pub max_voters: u64,
}

impl<C: Context> ElectionConfig<C> {
    /// Config with the default [`MAX_VOTERS`] cap.
    pub fn new(admin: C::Address) -> Self {
        Self {
            admin,
            max_voters: MAX_VOTERS,
        }
    }
}

/// The election state machine. It carries no data of its own: every
/// operation works on an [`ElectionState`] passed in by the caller.
#[derive(Debug, Clone)]
pub struct ElectionLedger<C: Context> {
    _phantom: PhantomData<C>,
}

impl<C: Context> Default for ElectionLedger<C> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<C: Context> Module for ElectionLedger<C> {
    type Context = C;

    type Config = ElectionConfig<C>;

    type State = ElectionState<C::Address>;

    type CallMessage = call::CallMessage;

    fn genesis(&self, config: &Self::Config, state: &mut Self::State) -> Result<(), ModuleError> {
        Ok(self.init_module(config, state)?)
    }

    fn call(
        &self,
        msg: Self::CallMessage,
        context: &Self::Context,
        state: &mut Self::State,
    ) -> Result<CallResponse, ModuleError> {
        match msg {
            CallMessage::AddCandidate { name } => {
                Ok(self.call_add_candidate(name, context, state)?)
            }
            CallMessage::Vote { candidate_id } => {
                Ok(self.call_vote(candidate_id, context, state)?)
            }
        }
    }
}
