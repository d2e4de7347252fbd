//! Position and candidate registry.
//!
//! Both batch entry points validate the whole input before the first write,
//! so a bad entry leaves the campaign exactly as it was.

use crate::types::{Campaign, Candidate, CandidateInput, Position, PositionInput};
use crate::{campaign, events, storage, validation, ContractError};
use soroban_sdk::{log, Env, Vec};

/// Appends `inputs` as new positions of `campaign_id`.
///
/// Allowed only while the campaign is upcoming. An empty batch is a no-op.
pub fn add_positions(
    env: &Env,
    campaign_id: u64,
    inputs: &Vec<PositionInput>,
) -> Result<Vec<u32>, ContractError> {
    let mut campaign = campaign::load(env, campaign_id)?;
    validation::require_upcoming(campaign::status(env, &campaign))?;
    validation::validate_positions(inputs)?;

    let mut ids = Vec::new(env);
    if inputs.is_empty() {
        return Ok(ids);
    }

    let mut next = campaign.position_count;
    for input in inputs.iter() {
        next = next.checked_add(1).ok_or(ContractError::Overflow)?;
        let position = Position {
            name: input.name.clone(),
            description: input.description,
            exists: true,
        };
        storage::set_position(env, campaign_id, next, &position);
        events::publish_position_added(env, campaign_id, next, input.name);
        ids.push_back(next);
    }

    campaign.position_count = next;
    storage::set_campaign(env, &campaign);

    log!(env, "positions added", campaign_id, ids.len());
    Ok(ids)
}

/// Registers `inputs` as candidates of `campaign_id`.
///
/// Every referenced position must already exist; otherwise nothing is
/// registered. No time window applies. An empty batch is a no-op.
pub fn register_candidates(
    env: &Env,
    campaign_id: u64,
    inputs: &Vec<CandidateInput>,
) -> Result<Vec<u32>, ContractError> {
    let mut campaign = campaign::load(env, campaign_id)?;
    validation::validate_batch_len(inputs.len())?;
    for input in inputs.iter() {
        require_position(env, &campaign, input.position_id)?;
        validation::validate_candidate(&input)?;
    }

    let mut ids = Vec::new(env);
    if inputs.is_empty() {
        return Ok(ids);
    }

    let mut next = campaign.candidate_count;
    for input in inputs.iter() {
        next = next.checked_add(1).ok_or(ContractError::Overflow)?;
        let candidate = Candidate {
            name: input.name.clone(),
            metadata: input.metadata,
            position_id: input.position_id,
            exists: true,
        };
        storage::set_candidate(env, campaign_id, next, &candidate);
        events::publish_candidate_registered(
            env,
            campaign_id,
            next,
            input.position_id,
            input.name,
        );
        ids.push_back(next);
    }

    campaign.candidate_count = next;
    storage::set_campaign(env, &campaign);

    log!(env, "candidates registered", campaign_id, ids.len());
    Ok(ids)
}

fn require_position(env: &Env, campaign: &Campaign, position_id: u32) -> Result<(), ContractError> {
    if position_id == 0
        || position_id > campaign.position_count
        || !storage::has_position(env, campaign.id, position_id)
    {
        return Err(ContractError::PositionNotFound);
    }
    Ok(())
}

pub fn position(env: &Env, campaign_id: u64, position_id: u32) -> Position {
    storage::get_position(env, campaign_id, position_id).unwrap_or_else(|| Position::missing(env))
}

pub fn candidate(env: &Env, campaign_id: u64, candidate_id: u32) -> Candidate {
    storage::get_candidate(env, campaign_id, candidate_id).unwrap_or_else(|| Candidate::missing(env))
}

/// All positions of a campaign in id order (ids are `1..=position_count`).
pub fn positions(env: &Env, campaign_id: u64) -> Vec<Position> {
    let mut out = Vec::new(env);
    if let Some(c) = storage::get_campaign(env, campaign_id) {
        for id in 1..=c.position_count {
            out.push_back(position(env, campaign_id, id));
        }
    }
    out
}

/// All candidates of a campaign in id order (ids are `1..=candidate_count`).
pub fn candidates(env: &Env, campaign_id: u64) -> Vec<Candidate> {
    let mut out = Vec::new(env);
    if let Some(c) = storage::get_campaign(env, campaign_id) {
        for id in 1..=c.candidate_count {
            out.push_back(candidate(env, campaign_id, id));
        }
    }
    out
}

/// Ids of the candidates standing for `position_id`, ascending.
pub fn candidates_for_position(env: &Env, campaign_id: u64, position_id: u32) -> Vec<u32> {
    let mut out = Vec::new(env);
    if let Some(c) = storage::get_campaign(env, campaign_id) {
        for id in 1..=c.candidate_count {
            if let Some(cand) = storage::get_candidate(env, campaign_id, id) {
                if cand.position_id == position_id {
                    out.push_back(id);
                }
            }
        }
    }
    out
}
