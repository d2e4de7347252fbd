use crate::config::{TTL_EXTEND_TO, TTL_THRESHOLD};
use crate::types::{Campaign, Candidate, Position, VoteInput};
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Storage layout.
///
/// Instance storage holds the contract-wide singletons (`Owner`,
/// `Initialized`, `CampaignCount`); every per-campaign record lives in
/// persistent storage under a tuple-like key.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Initialized,
    CampaignCount,
    Campaign(u64),
    Position(u64, u32),  // (campaign_id, position_id)
    Candidate(u64, u32), // (campaign_id, candidate_id)
    VoteCount(u64, u32), // (campaign_id, candidate_id)
    Voter(u64, u32, u64), // (campaign_id, candidate_id, index) -> Address
    HasVoted(u64, Address),
    Ballot(u64, Address), // (campaign_id, voter) -> Vec<VoteInput>
}

/// Extends the TTL of instance storage (owner, counters).
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Singletons ───────────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn set_campaign_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::CampaignCount, &count);
}

// ── Campaigns ────────────────────────────────────────────────────────────────

pub fn get_campaign(env: &Env, campaign_id: u64) -> Option<Campaign> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
}

pub fn set_campaign(env: &Env, campaign: &Campaign) {
    set_persistent(env, &DataKey::Campaign(campaign.id), campaign);
}

// ── Positions / candidates ───────────────────────────────────────────────────

pub fn get_position(env: &Env, campaign_id: u64, position_id: u32) -> Option<Position> {
    env.storage()
        .persistent()
        .get(&DataKey::Position(campaign_id, position_id))
}

pub fn has_position(env: &Env, campaign_id: u64, position_id: u32) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Position(campaign_id, position_id))
}

pub fn set_position(env: &Env, campaign_id: u64, position_id: u32, position: &Position) {
    set_persistent(env, &DataKey::Position(campaign_id, position_id), position);
}

pub fn get_candidate(env: &Env, campaign_id: u64, candidate_id: u32) -> Option<Candidate> {
    env.storage()
        .persistent()
        .get(&DataKey::Candidate(campaign_id, candidate_id))
}

pub fn set_candidate(env: &Env, campaign_id: u64, candidate_id: u32, candidate: &Candidate) {
    set_persistent(
        env,
        &DataKey::Candidate(campaign_id, candidate_id),
        candidate,
    );
}

// ── Votes ────────────────────────────────────────────────────────────────────

pub fn vote_count(env: &Env, campaign_id: u64, candidate_id: u32) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::VoteCount(campaign_id, candidate_id))
        .unwrap_or(0)
}

pub fn set_vote_count(env: &Env, campaign_id: u64, candidate_id: u32, count: u64) {
    set_persistent(env, &DataKey::VoteCount(campaign_id, candidate_id), &count);
}

/// The `index`-th voter of a candidate. Indices run `0..vote_count`.
pub fn voter_at(env: &Env, campaign_id: u64, candidate_id: u32, index: u64) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(campaign_id, candidate_id, index))
}

pub fn set_voter_at(
    env: &Env,
    campaign_id: u64,
    candidate_id: u32,
    index: u64,
    voter: &Address,
) {
    set_persistent(env, &DataKey::Voter(campaign_id, candidate_id, index), voter);
}

pub fn has_voted(env: &Env, campaign_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::HasVoted(campaign_id, voter.clone()))
        .unwrap_or(false)
}

pub fn mark_voted(env: &Env, campaign_id: u64, voter: &Address) {
    set_persistent(env, &DataKey::HasVoted(campaign_id, voter.clone()), &true);
}

pub fn ballot(env: &Env, campaign_id: u64, voter: &Address) -> Vec<VoteInput> {
    env.storage()
        .persistent()
        .get(&DataKey::Ballot(campaign_id, voter.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_ballot(env: &Env, campaign_id: u64, voter: &Address, entries: &Vec<VoteInput>) {
    set_persistent(env, &DataKey::Ballot(campaign_id, voter.clone()), entries);
}
