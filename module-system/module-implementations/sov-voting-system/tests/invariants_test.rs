use std::collections::HashSet;

use helpers::{create_election_with_candidates, voter, CANDIDATES};
use proptest::prelude::*;
use sov_voting_system::{VotingError, MAX_VOTERS};

mod helpers;

fn ballots() -> impl Strategy<Value = Vec<(u64, u64)>> {
    // (voter index, candidate id); both ranges overshoot to hit every rejection path.
    prop::collection::vec((0..30u64, 0..6u64), 0..60)
}

proptest! {
    #[test]
    fn tally_counters_always_agree(ballots in ballots()) {
        let election = create_election_with_candidates(MAX_VOTERS);
        let mut voted = HashSet::new();

        for (voter_index, candidate_id) in ballots {
            let before = election.results();
            let outcome = election.vote(candidate_id, &voter(voter_index));
            let after = election.results();

            match outcome {
                Ok(receipt) => {
                    prop_assert!(voted.insert(voter_index));
                    prop_assert_eq!(receipt.total_votes_cast, before.total_votes_cast + 1);
                }
                Err(VotingError::CapacityExceeded) => {
                    prop_assert_eq!(before.total_votes_cast, MAX_VOTERS);
                    prop_assert_eq!(&before, &after);
                }
                Err(VotingError::AlreadyVoted) => {
                    prop_assert!(voted.contains(&voter_index));
                    prop_assert_eq!(&before, &after);
                }
                Err(VotingError::InvalidCandidate { id, .. }) => {
                    prop_assert!(id >= CANDIDATES.len() as u64);
                    prop_assert_eq!(&before, &after);
                }
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }

            let tally: u64 = after.candidates.iter().map(|c| c.vote_count()).sum();
            prop_assert_eq!(after.total_votes_cast, tally);
            prop_assert_eq!(after.total_votes_cast, voted.len() as u64);
            prop_assert!(after.total_votes_cast <= MAX_VOTERS);
            for (old, new) in before.candidates.iter().zip(&after.candidates) {
                prop_assert!(new.vote_count() >= old.vote_count());
            }
        }

        for i in 0..30 {
            prop_assert_eq!(election.has_voted(&voter(i)), voted.contains(&i));
        }
    }

    #[test]
    fn winner_is_deterministic(ballots in ballots()) {
        let election = create_election_with_candidates(MAX_VOTERS);
        for (voter_index, candidate_id) in ballots {
            let _ = election.vote(candidate_id, &voter(voter_index));
        }

        let winner = election.winner().unwrap();
        prop_assert_eq!(election.winner().unwrap(), winner.clone());

        let candidates = election.results().candidates;
        let max = candidates.iter().map(|c| c.vote_count()).max().unwrap();
        let first_max = candidates.iter().find(|c| c.vote_count() == max).unwrap();
        prop_assert_eq!(first_max, &winner);
    }
}
