//! Scripted election: registers the configured candidates, lets a batch of
//! voters cast their ballots concurrently, and reports the outcome.

#![deny(missing_docs)]

mod config;
mod demo;

pub use config::{from_toml_path, DemoConfig};
pub use demo::{max_demo_voters, run_demo, DemoReport, RejectedVote};
