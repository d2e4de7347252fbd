#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env, String};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub timestamp: u64,
}

/// Fired when a campaign is created. Clients read the new id from here.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: u64,
    pub creator: Address,
    pub title: String,
    pub start_time: u64,
    pub end_time: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionAddedEvent {
    pub campaign_id: u64,
    pub position_id: u32,
    pub name: String,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateRegisteredEvent {
    pub campaign_id: u64,
    pub candidate_id: u32,
    pub position_id: u32,
    pub name: String,
}

/// Fired for every recorded vote, single or batched.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCastEvent {
    pub campaign_id: u64,
    pub voter: Address,
    pub position_id: u32,
    pub candidate_id: u32,
    pub new_count: u64,
    pub timestamp: u64,
}

/// Fired once per successful `vote_batch`.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BallotCastEvent {
    pub campaign_id: u64,
    pub voter: Address,
    pub count: u32,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        owner,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_campaign_created(
    env: &Env,
    campaign_id: u64,
    creator: Address,
    title: String,
    start_time: u64,
    end_time: u64,
) {
    let topics = (symbol_short!("CMP_NEW"), campaign_id);
    let data = CampaignCreatedEvent {
        campaign_id,
        creator,
        title,
        start_time,
        end_time,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_position_added(env: &Env, campaign_id: u64, position_id: u32, name: String) {
    let topics = (symbol_short!("POS_ADD"), campaign_id);
    let data = PositionAddedEvent {
        campaign_id,
        position_id,
        name,
    };
    env.events().publish(topics, data);
}

pub fn publish_candidate_registered(
    env: &Env,
    campaign_id: u64,
    candidate_id: u32,
    position_id: u32,
    name: String,
) {
    let topics = (symbol_short!("CND_REG"), campaign_id);
    let data = CandidateRegisteredEvent {
        campaign_id,
        candidate_id,
        position_id,
        name,
    };
    env.events().publish(topics, data);
}

pub fn publish_vote_cast(
    env: &Env,
    campaign_id: u64,
    voter: Address,
    position_id: u32,
    candidate_id: u32,
    new_count: u64,
) {
    let topics = (symbol_short!("VOTE"), campaign_id, voter.clone());
    let data = VoteCastEvent {
        campaign_id,
        voter,
        position_id,
        candidate_id,
        new_count,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_ballot_cast(env: &Env, campaign_id: u64, voter: Address, count: u32) {
    let topics = (symbol_short!("BALLOT"), campaign_id, voter.clone());
    let data = BallotCastEvent {
        campaign_id,
        voter,
        count,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
