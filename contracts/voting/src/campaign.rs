//! Campaign registry: creation, lookup and derived lifecycle status.

use crate::types::{Campaign, CampaignInfo, CampaignStatus};
use crate::{events, storage, validation, ContractError};
use soroban_sdk::{log, Address, Env, String};

/// Validates and stores a new campaign, returning its id.
pub fn create(
    env: &Env,
    creator: Address,
    title: String,
    description: String,
    start_time: u64,
    end_time: u64,
) -> Result<u64, ContractError> {
    let now = env.ledger().timestamp();
    validation::validate_campaign(&description, start_time, end_time, now)?;

    let id = storage::campaign_count(env)
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;

    let campaign = Campaign {
        id,
        creator: creator.clone(),
        title: title.clone(),
        description,
        start_time,
        end_time,
        is_active: true,
        position_count: 0,
        candidate_count: 0,
        created_at: now,
    };
    storage::set_campaign(env, &campaign);
    storage::set_campaign_count(env, id);

    log!(env, "campaign created", id, start_time, end_time);
    events::publish_campaign_created(env, id, creator, title, start_time, end_time);

    Ok(id)
}

pub fn load(env: &Env, campaign_id: u64) -> Result<Campaign, ContractError> {
    storage::get_campaign(env, campaign_id).ok_or(ContractError::CampaignNotFound)
}

pub fn info(env: &Env, campaign_id: u64) -> CampaignInfo {
    match storage::get_campaign(env, campaign_id) {
        Some(campaign) => campaign.into(),
        None => CampaignInfo::missing(env),
    }
}

pub fn status(env: &Env, campaign: &Campaign) -> CampaignStatus {
    campaign.status(env.ledger().timestamp())
}

/// Id the next successful `create` will assign.
pub fn next_id(env: &Env) -> u64 {
    storage::campaign_count(env).saturating_add(1)
}
