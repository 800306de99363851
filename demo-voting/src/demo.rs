use std::fmt;
use std::sync::Arc;

use anyhow::{ensure, Context as _};
use serde::Serialize;
use sov_modules_core::{generate_address, Address, Context, DefaultContext};
use sov_voting_system::{
    CallMessage, CandidateId, ElectionConfig, ElectionResults, SharedElection,
};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::config::DemoConfig;

type C = DefaultContext;

/// A vote the election turned away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedVote {
    /// Position of the voter in the scripted run.
    pub voter_index: u64,
    /// Address the vote was cast from.
    pub voter: Address,
    /// Candidate the voter picked.
    pub candidate_id: CandidateId,
    /// Rendered [`sov_voting_system::VotingError`].
    pub reason: String,
}

/// Outcome of a demo run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    /// Address that registered the candidates.
    pub admin: Address,
    /// Final tally.
    pub results: ElectionResults,
    /// Rejected votes ordered by voter index.
    pub rejected: Vec<RejectedVote>,
}

fn voter_address(index: u64) -> Address {
    generate_address::<C>(&format!("voter_{index}"))
}

/// Runs the scripted election: the admin registers every configured
/// candidate, then `voters` distinct voters vote round-robin (`i % candidates`)
/// in parallel.
///
/// At most [`max_demo_voters`] voters are accepted, since each one gets its
/// own blocking task.
pub async fn run_demo(config: &DemoConfig, voters: u64) -> anyhow::Result<DemoReport> {
    ensure!(
        !config.candidates.is_empty(),
        "At least one candidate must be configured"
    );
    let voter_limit = max_demo_voters(config.max_voters);
    ensure!(
        voters <= voter_limit,
        "Too many voters: {voters}, the limit for a cap of {} is {voter_limit}",
        config.max_voters
    );

    let admin = generate_address::<C>(&config.admin_key);
    let election = Arc::new(
        SharedElection::<C>::new(&ElectionConfig {
            admin,
            max_voters: config.max_voters,
        })
        .context("Failed to initialize the election")?,
    );
    info!(%admin, max_voters = config.max_voters, "Election initialized");

    let admin_context = C::new(admin);
    for name in &config.candidates {
        let response = election
            .call(
                CallMessage::AddCandidate { name: name.clone() },
                &admin_context,
            )
            .with_context(|| format!("Failed to register candidate {name:?}"))?;
        for event in &response.events {
            debug!(key = event.key(), value = event.value(), "Event");
        }
        info!("Candidate {name} registered");
    }

    let candidate_count = config.candidates.len() as u64;
    let mut tasks = JoinSet::new();
    for voter_index in 0..voters {
        let election = Arc::clone(&election);
        let candidate_id = voter_index % candidate_count;
        tasks.spawn_blocking(move || {
            let voter = voter_address(voter_index);
            let outcome = election.vote(candidate_id, &voter);
            (voter_index, voter, candidate_id, outcome)
        });
    }

    let mut rejected = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (voter_index, voter, candidate_id, outcome) =
            joined.context("Voter task failed")?;
        match outcome {
            Ok(receipt) => info!(
                %voter,
                candidate_id,
                vote_count = receipt.vote_count,
                total_votes_cast = receipt.total_votes_cast,
                "Vote accepted"
            ),
            Err(err) => {
                warn!(%voter, candidate_id, %err, "Vote rejected");
                rejected.push(RejectedVote {
                    voter_index,
                    voter,
                    candidate_id,
                    reason: err.to_string(),
                });
            }
        }
    }
    rejected.sort_by_key(|rejection| rejection.voter_index);

    Ok(DemoReport {
        admin,
        results: election.results(),
        rejected,
    })
}

/// Largest number of voters a demo with the given cap will run: enough for
/// every seat to fill and as many voters again to be turned away.
pub fn max_demo_voters(max_voters: u64) -> u64 {
    max_voters.saturating_mul(2)
}

/// Human readable summary of the run.
impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results = &self.results;

        writeln!(f, "--- Vote Counts ---")?;
        for candidate in &results.candidates {
            writeln!(f, "{}: {} votes", candidate.name(), candidate.vote_count())?;
        }
        writeln!(
            f,
            "Total: {}/{} ({:?})",
            results.total_votes_cast, results.max_voters, results.phase
        )?;

        if !self.rejected.is_empty() {
            writeln!(f, "--- Rejected Votes ---")?;
            for rejection in &self.rejected {
                writeln!(f, "{}: {}", rejection.voter, rejection.reason)?;
            }
        }

        writeln!(f, "--- Winner ---")?;
        match &results.winner {
            Some(winner) => writeln!(
                f,
                "Winner: {} with {} votes",
                winner.name(),
                winner.vote_count()
            ),
            None => writeln!(f, "No candidates registered"),
        }
    }
}
