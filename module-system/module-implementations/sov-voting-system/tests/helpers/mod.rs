#![allow(dead_code)]

use sov_modules_core::{generate_address, Address, Context, DefaultContext};
use sov_voting_system::{ElectionConfig, SharedElection};

pub type C = DefaultContext;

pub const CANDIDATES: [&str; 4] = ["Alice", "Bob", "Charlie", "David"];

pub fn admin() -> Address {
    generate_address::<C>("admin")
}

pub fn voter(i: u64) -> Address {
    generate_address::<C>(&format!("voter_{i}"))
}

pub fn create_election_with_candidates(max_voters: u64) -> SharedElection<C> {
    let config = ElectionConfig::<C> {
        admin: admin(),
        max_voters,
    };
    let election = SharedElection::new(&config).unwrap();
    let admin_context = C::new(admin());

    for name in CANDIDATES {
        election.add_candidate(name, &admin_context).unwrap();
    }

    election
}
