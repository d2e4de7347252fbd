use crate::config::MAX_BATCH_SIZE;
use crate::types::{CampaignStatus, CandidateInput, PositionInput};
use crate::ContractError;
use soroban_sdk::{String, Vec};

/// Checks the creation-time invariants of a campaign window, in order:
/// non-empty description, start strictly in the future, end strictly after start.
pub fn validate_campaign(
    description: &String,
    start_time: u64,
    end_time: u64,
    now: u64,
) -> Result<(), ContractError> {
    if description.len() == 0 {
        return Err(ContractError::EmptyDescription);
    }
    if start_time <= now {
        return Err(ContractError::StartTimeNotFuture);
    }
    if end_time <= start_time {
        return Err(ContractError::EndTimeBeforeStart);
    }
    Ok(())
}

pub fn validate_batch_len(len: u32) -> Result<(), ContractError> {
    if len > MAX_BATCH_SIZE {
        return Err(ContractError::BatchTooLarge);
    }
    Ok(())
}

pub fn validate_position(input: &PositionInput) -> Result<(), ContractError> {
    if input.name.len() == 0 || input.description.len() == 0 {
        return Err(ContractError::EmptyPositionField);
    }
    Ok(())
}

pub fn validate_positions(inputs: &Vec<PositionInput>) -> Result<(), ContractError> {
    validate_batch_len(inputs.len())?;
    for input in inputs.iter() {
        validate_position(&input)?;
    }
    Ok(())
}

pub fn validate_candidate(input: &CandidateInput) -> Result<(), ContractError> {
    if input.name.len() == 0 {
        return Err(ContractError::EmptyCandidateName);
    }
    Ok(())
}

/// Ballot structure may only change before voting opens.
pub fn require_upcoming(status: CampaignStatus) -> Result<(), ContractError> {
    match status {
        CampaignStatus::Upcoming => Ok(()),
        _ => Err(ContractError::PositionsAfterStart),
    }
}

pub fn require_active(status: CampaignStatus) -> Result<(), ContractError> {
    match status {
        CampaignStatus::Active => Ok(()),
        _ => Err(ContractError::NotInVotingPeriod),
    }
}
