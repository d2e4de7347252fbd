//! Vote recording, tallies and the per-candidate voter audit lists.
//!
//! A voter moves from not-voted to voted exactly once per campaign, through
//! either `cast` (one candidate) or `cast_batch` (one candidate per position).

use crate::types::{Campaign, CandidateTally, VoteInput};
use crate::{campaign, events, storage, validation, ContractError};
use soroban_sdk::{log, Address, Env, Map, Vec};

/// Single vote. Checks run in order: campaign exists, voting open,
/// candidate exists, voter has not voted yet.
pub fn cast(
    env: &Env,
    voter: &Address,
    campaign_id: u64,
    candidate_id: u32,
) -> Result<(), ContractError> {
    let campaign = campaign::load(env, campaign_id)?;
    validation::require_active(campaign::status(env, &campaign))?;

    let candidate = storage::get_candidate(env, campaign_id, candidate_id)
        .ok_or(ContractError::CandidateNotFound)?;

    if storage::has_voted(env, campaign_id, voter) {
        return Err(ContractError::AlreadyVoted);
    }

    let mut entries = Vec::new(env);
    entries.push_back(VoteInput {
        position_id: candidate.position_id,
        candidate_id,
    });
    record(env, voter, &campaign, &entries)
}

/// Ballot covering several positions at once. Every entry is validated
/// before anything is written; a rejected ballot leaves the voter free to
/// resubmit.
pub fn cast_batch(
    env: &Env,
    voter: &Address,
    campaign_id: u64,
    entries: &Vec<VoteInput>,
) -> Result<(), ContractError> {
    let campaign = campaign::load(env, campaign_id)?;
    validation::require_active(campaign::status(env, &campaign))?;

    if storage::has_voted(env, campaign_id, voter) {
        return Err(ContractError::AlreadyVoted);
    }
    if entries.is_empty() {
        return Err(ContractError::EmptyBallot);
    }
    validation::validate_batch_len(entries.len())?;

    let mut seen: Map<u32, bool> = Map::new(env);
    for entry in entries.iter() {
        let candidate = storage::get_candidate(env, campaign_id, entry.candidate_id)
            .ok_or(ContractError::CandidateNotFound)?;
        if candidate.position_id != entry.position_id {
            return Err(ContractError::CandidateNotRegisteredForPosition);
        }
        if seen.contains_key(entry.position_id) {
            return Err(ContractError::DuplicatePositionVote);
        }
        seen.set(entry.position_id, true);
    }

    record(env, voter, &campaign, entries)?;
    events::publish_ballot_cast(env, campaign_id, voter.clone(), entries.len());
    Ok(())
}

/// Applies an already-validated ballot.
fn record(
    env: &Env,
    voter: &Address,
    campaign: &Campaign,
    entries: &Vec<VoteInput>,
) -> Result<(), ContractError> {
    let campaign_id = campaign.id;

    // Compute every new count first so an overflow aborts before any write.
    let mut counts: Vec<u64> = Vec::new(env);
    for entry in entries.iter() {
        let next = storage::vote_count(env, campaign_id, entry.candidate_id)
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        counts.push_back(next);
    }

    storage::mark_voted(env, campaign_id, voter);
    storage::set_ballot(env, campaign_id, voter, entries);

    for (entry, count) in entries.iter().zip(counts.iter()) {
        // One entry per voter, indexed by the previous tally.
        storage::set_voter_at(env, campaign_id, entry.candidate_id, count - 1, voter);
        storage::set_vote_count(env, campaign_id, entry.candidate_id, count);

        events::publish_vote_cast(
            env,
            campaign_id,
            voter.clone(),
            entry.position_id,
            entry.candidate_id,
            count,
        );
    }

    log!(env, "ballot recorded", campaign_id, entries.len());
    Ok(())
}

/// The `(position_ids, candidate_ids)` a voter chose, in submission order.
pub fn user_votes(env: &Env, campaign_id: u64, voter: &Address) -> (Vec<u32>, Vec<u32>) {
    let mut position_ids = Vec::new(env);
    let mut candidate_ids = Vec::new(env);
    for entry in storage::ballot(env, campaign_id, voter).iter() {
        position_ids.push_back(entry.position_id);
        candidate_ids.push_back(entry.candidate_id);
    }
    (position_ids, candidate_ids)
}

/// Every voter of a candidate, in vote order.
pub fn voters(env: &Env, campaign_id: u64, candidate_id: u32) -> Vec<Address> {
    let total = storage::vote_count(env, campaign_id, candidate_id);
    collect_voters(env, campaign_id, candidate_id, 0, total)
}

/// Up to `limit` voters of a candidate starting at index `start`.
pub fn voters_page(
    env: &Env,
    campaign_id: u64,
    candidate_id: u32,
    start: u32,
    limit: u32,
) -> Vec<Address> {
    let total = storage::vote_count(env, campaign_id, candidate_id);
    let start = u64::from(start);
    if start >= total || limit == 0 {
        return Vec::new(env);
    }
    let end = start.saturating_add(u64::from(limit)).min(total);
    collect_voters(env, campaign_id, candidate_id, start, end)
}

fn collect_voters(
    env: &Env,
    campaign_id: u64,
    candidate_id: u32,
    from: u64,
    to: u64,
) -> Vec<Address> {
    let mut out = Vec::new(env);
    for index in from..to {
        if let Some(voter) = storage::voter_at(env, campaign_id, candidate_id, index) {
            out.push_back(voter);
        }
    }
    out
}

/// Tally of every registered candidate, ordered by candidate id.
pub fn results(env: &Env, campaign_id: u64) -> Vec<CandidateTally> {
    let mut out = Vec::new(env);
    let Some(c) = storage::get_campaign(env, campaign_id) else {
        return out;
    };
    for candidate_id in 1..=c.candidate_count {
        if let Some(cand) = storage::get_candidate(env, campaign_id, candidate_id) {
            out.push_back(CandidateTally {
                candidate_id,
                position_id: cand.position_id,
                votes: storage::vote_count(env, campaign_id, candidate_id),
            });
        }
    }
    out
}
