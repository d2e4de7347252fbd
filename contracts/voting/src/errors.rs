use soroban_sdk::{contracterror, contracttype};

/// Error categories for classifying rejected transactions.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Malformed input or lifecycle misuse
    Validation = 1,
    /// Referenced campaign, position or candidate does not exist
    NotFound = 2,
    /// Operation attempted outside its time window
    Window = 3,
    /// Action already taken by this caller
    Duplicate = 4,
    /// Arithmetic or host-level failure
    System = 5,
}

/// Contract errors.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle / initialisation     |
/// | 10 – 19 | Input validation               |
/// | 20 – 29 | Referenced entity not found    |
/// | 30 – 39 | Time-window violations         |
/// | 40 – 49 | Duplicate actions              |
/// | 50+     | System                         |
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,

    EmptyDescription = 10,
    StartTimeNotFuture = 11,
    EndTimeBeforeStart = 12,
    EmptyPositionField = 13,
    EmptyCandidateName = 14,
    EmptyBallot = 15,
    BatchTooLarge = 16,

    CampaignNotFound = 20,
    PositionNotFound = 21,
    CandidateNotFound = 22,
    CandidateNotRegisteredForPosition = 23,

    PositionsAfterStart = 30,
    NotInVotingPeriod = 31,

    AlreadyVoted = 40,
    DuplicatePositionVote = 41,

    Overflow = 50,
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::EmptyDescription
            | ContractError::StartTimeNotFuture
            | ContractError::EndTimeBeforeStart
            | ContractError::EmptyPositionField
            | ContractError::EmptyCandidateName
            | ContractError::EmptyBallot
            | ContractError::BatchTooLarge => ErrorCategory::Validation,
            ContractError::CampaignNotFound
            | ContractError::PositionNotFound
            | ContractError::CandidateNotFound
            | ContractError::CandidateNotRegisteredForPosition => ErrorCategory::NotFound,
            ContractError::PositionsAfterStart | ContractError::NotInVotingPeriod => {
                ErrorCategory::Window
            }
            ContractError::AlreadyVoted | ContractError::DuplicatePositionVote => {
                ErrorCategory::Duplicate
            }
            ContractError::Overflow => ErrorCategory::System,
        }
    }

    /// Returns the reason string shown to the end user when a transaction
    /// is rejected with this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::EmptyDescription => "Campaign description cannot be empty",
            ContractError::StartTimeNotFuture => "Start time must be in the future",
            ContractError::EndTimeBeforeStart => "End time must be after start time",
            ContractError::EmptyPositionField => "Position name and description cannot be empty",
            ContractError::EmptyCandidateName => "Candidate name cannot be empty",
            ContractError::EmptyBallot => "Ballot must contain at least one vote",
            ContractError::BatchTooLarge => "Batch exceeds the maximum number of entries",
            ContractError::CampaignNotFound => "Campaign does not exist",
            ContractError::PositionNotFound => "Position does not exist",
            ContractError::CandidateNotFound => "Candidate does not exist",
            ContractError::CandidateNotRegisteredForPosition => {
                "Candidate is not registered for this position"
            }
            ContractError::PositionsAfterStart => "Cannot add positions after campaign has started",
            ContractError::NotInVotingPeriod => "Campaign is not in voting period",
            ContractError::AlreadyVoted => "Already voted in this campaign",
            ContractError::DuplicatePositionVote => "Cannot vote multiple times for same position",
            ContractError::Overflow => "Counter overflow",
        }
    }
}
