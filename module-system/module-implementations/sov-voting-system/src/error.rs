use thiserror::Error;

use crate::CandidateId;

/// Reasons the election rejects a call. No rejected call changes any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VotingError {
    /// The cap on the total number of votes was reached.
    #[error("Maximum voter limit reached")]
    CapacityExceeded,
    /// The identity already has a recorded vote.
    #[error("Voter has already voted")]
    AlreadyVoted,
    /// The candidate id is out of range.
    #[error("Candidate {id} doesn't exist, {count} candidates are registered")]
    InvalidCandidate {
        /// Requested id.
        id: CandidateId,
        /// Number of registered candidates.
        count: u64,
    },
    /// A winner was requested before any candidate was registered.
    #[error("No candidates are registered")]
    NoCandidates,
    /// Candidate registration by someone other than the administrator.
    #[error("Only admin can add candidates")]
    NotAdmin,
    /// Candidate names must contain at least one non-whitespace character.
    #[error("Candidate name must not be empty")]
    EmptyCandidateName,
    /// A counter would wrap around.
    #[error("Vote count overflow")]
    VoteCountOverflow,
}
