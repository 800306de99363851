use std::sync::Arc;
use std::thread;

use helpers::{create_election_with_candidates, voter};
use sov_voting_system::{Phase, VotingError, MAX_VOTERS};

mod helpers;

#[test]
fn concurrent_voters_never_exceed_cap() {
    let election = Arc::new(create_election_with_candidates(MAX_VOTERS));
    let attempts = MAX_VOTERS * 3;

    let handles: Vec<_> = (0..attempts)
        .map(|i| {
            let election = Arc::clone(&election);
            thread::spawn(move || election.vote(i % 4, &voter(i)))
        })
        .collect();

    let outcomes: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let accepted = outcomes.iter().filter(|outcome| outcome.is_ok()).count() as u64;
    assert_eq!(accepted, MAX_VOTERS);
    assert!(outcomes
        .iter()
        .filter_map(|outcome| outcome.as_ref().err())
        .all(|err| *err == VotingError::CapacityExceeded));

    let results = election.results();
    let tally: u64 = results.candidates.iter().map(|c| c.vote_count()).sum();
    assert_eq!(results.total_votes_cast, MAX_VOTERS);
    assert_eq!(tally, MAX_VOTERS);
    assert_eq!(results.phase, Phase::Closed);
}

#[test]
fn concurrent_duplicate_votes_are_counted_once() {
    let election = Arc::new(create_election_with_candidates(MAX_VOTERS));
    let voter = voter(0);

    let accepted = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| election.vote(1, &voter)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(Result::is_ok)
            .count()
    });

    assert_eq!(accepted, 1);
    assert_eq!(election.total_votes_cast(), 1);
    assert_eq!(election.candidate_details(1).unwrap().vote_count(), 1);
}

#[test]
fn readers_observe_consistent_snapshots() {
    let election = Arc::new(create_election_with_candidates(MAX_VOTERS));

    thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..MAX_VOTERS {
                election.vote(i % 4, &voter(i)).unwrap();
            }
        });

        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let results = election.results();
                    let tally: u64 = results.candidates.iter().map(|c| c.vote_count()).sum();
                    assert_eq!(tally, results.total_votes_cast);
                }
            });
        }
    });

    assert_eq!(election.total_votes_cast(), MAX_VOTERS);
}

#[test]
fn snapshots_taken_mid_run_are_consistent() {
    let election = Arc::new(create_election_with_candidates(MAX_VOTERS));

    let snapshots = thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..MAX_VOTERS {
                election.vote(i % 4, &voter(i)).unwrap();
            }
        });

        let reader = scope.spawn(|| (0..50).map(|_| election.snapshot()).collect::<Vec<_>>());
        reader.join().unwrap()
    });

    for snapshot in &snapshots {
        let results = election.ledger().results(snapshot);
        let tally: u64 = results.candidates.iter().map(|c| c.vote_count()).sum();
        assert_eq!(tally, results.total_votes_cast);
        assert!(results.total_votes_cast <= MAX_VOTERS);
        let counted_voters = (0..MAX_VOTERS)
            .filter(|i| election.ledger().has_voted(&voter(*i), snapshot))
            .count() as u64;
        assert_eq!(counted_voters, results.total_votes_cast);
        assert_eq!(election.ledger().max_voters(snapshot), MAX_VOTERS);
    }
}
