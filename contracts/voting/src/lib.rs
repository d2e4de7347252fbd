//! On-chain voting ledger.
//!
//! Organisers create time-boxed campaigns, fill them with positions and
//! candidates while the campaign is upcoming, and voters cast one ballot per
//! campaign while it is active. Tallies and the list of addresses behind
//! every candidate are public.
//!
//! ## Lifecycle
//! ```text
//! Upcoming ──► Active ──► Ended          (derived from the ledger clock)
//! NotVoted ──► Voted                     (per campaign, per voter)
//! ```
//!
//! Every entry point either applies completely or returns a
//! [`ContractError`] with no state change.
#![no_std]

pub mod ballot;
pub mod campaign;
pub mod config;
pub mod errors;
pub mod events;
pub mod storage;
pub mod types;
pub mod validation;
pub mod voting;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use errors::{ContractError, ErrorCategory};
pub use types::{
    Campaign, CampaignInfo, CampaignStatus, Candidate, CandidateInput, CandidateTally, Position,
    PositionInput, VoteInput,
};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Record the contract owner. Callable once.
    pub fn initialize(env: Env, owner: Address) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_owner(&env, &owner);
        storage::bump_instance(&env);

        events::publish_initialized(&env, owner);
        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    /// Address that deployed and initialised the ledger.
    pub fn owner(env: Env) -> Result<Address, ContractError> {
        storage::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn version() -> u32 {
        config::CONTRACT_VERSION
    }

    // ── Campaigns ───────────────────────────────────────────────────────────

    /// Create a campaign running over `[start_time, end_time]` (ledger
    /// seconds) and return its id. The id is also published in the
    /// `CMP_NEW` event.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        start_time: u64,
        end_time: u64,
    ) -> Result<u64, ContractError> {
        Self::require_initialized(&env)?;
        creator.require_auth();

        let id = campaign::create(&env, creator, title, description, start_time, end_time)?;
        storage::bump_instance(&env);
        Ok(id)
    }

    /// Zero-valued view with `exists == false` for unknown ids.
    pub fn get_campaign_info(env: Env, campaign_id: u64) -> CampaignInfo {
        campaign::info(&env, campaign_id)
    }

    pub fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, ContractError> {
        campaign::load(&env, campaign_id)
    }

    pub fn get_campaign_status(env: Env, campaign_id: u64) -> Result<CampaignStatus, ContractError> {
        let c = campaign::load(&env, campaign_id)?;
        Ok(campaign::status(&env, &c))
    }

    pub fn get_campaign_count(env: Env) -> u64 {
        storage::campaign_count(&env)
    }

    pub fn next_campaign_id(env: Env) -> u64 {
        campaign::next_id(&env)
    }

    // ── Positions ───────────────────────────────────────────────────────────

    pub fn add_position(
        env: Env,
        campaign_id: u64,
        name: String,
        description: String,
    ) -> Result<u32, ContractError> {
        let mut inputs = Vec::new(&env);
        inputs.push_back(PositionInput { name, description });
        let ids = Self::add_positions(env, campaign_id, inputs)?;
        Ok(ids.get_unchecked(0))
    }

    /// Add several positions in one transaction. Ids are returned in input
    /// order; an empty list changes nothing.
    pub fn add_positions(
        env: Env,
        campaign_id: u64,
        positions: Vec<PositionInput>,
    ) -> Result<Vec<u32>, ContractError> {
        Self::require_initialized(&env)?;
        let ids = ballot::add_positions(&env, campaign_id, &positions)?;
        storage::bump_instance(&env);
        Ok(ids)
    }

    /// `exists == false` for unallocated ids.
    pub fn get_position(env: Env, campaign_id: u64, position_id: u32) -> Position {
        ballot::position(&env, campaign_id, position_id)
    }

    pub fn get_positions(env: Env, campaign_id: u64) -> Vec<Position> {
        ballot::positions(&env, campaign_id)
    }

    // ── Candidates ──────────────────────────────────────────────────────────

    pub fn register_candidate(
        env: Env,
        campaign_id: u64,
        position_id: u32,
        name: String,
        metadata: String,
    ) -> Result<u32, ContractError> {
        let mut inputs = Vec::new(&env);
        inputs.push_back(CandidateInput {
            position_id,
            name,
            metadata,
        });
        let ids = Self::register_candidates_batch(env, campaign_id, inputs)?;
        Ok(ids.get_unchecked(0))
    }

    /// Register several candidates in one transaction. If any entry names a
    /// position that does not exist, none are registered.
    pub fn register_candidates_batch(
        env: Env,
        campaign_id: u64,
        candidates: Vec<CandidateInput>,
    ) -> Result<Vec<u32>, ContractError> {
        Self::require_initialized(&env)?;
        let ids = ballot::register_candidates(&env, campaign_id, &candidates)?;
        storage::bump_instance(&env);
        Ok(ids)
    }

    /// `exists == false` for unallocated ids.
    pub fn get_candidate(env: Env, campaign_id: u64, candidate_id: u32) -> Candidate {
        ballot::candidate(&env, campaign_id, candidate_id)
    }

    pub fn get_candidates(env: Env, campaign_id: u64) -> Vec<Candidate> {
        ballot::candidates(&env, campaign_id)
    }

    pub fn get_candidates_for_position(env: Env, campaign_id: u64, position_id: u32) -> Vec<u32> {
        ballot::candidates_for_position(&env, campaign_id, position_id)
    }

    // ── Voting ──────────────────────────────────────────────────────────────

    /// Cast a single vote. Fails with, in order of precedence:
    /// `NotInVotingPeriod`, `CandidateNotFound`, `AlreadyVoted`.
    pub fn vote(
        env: Env,
        voter: Address,
        campaign_id: u64,
        candidate_id: u32,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        voter.require_auth();

        voting::cast(&env, &voter, campaign_id, candidate_id)?;
        storage::bump_instance(&env);
        Ok(())
    }

    /// Cast one vote per position atomically. A position may appear at most
    /// once, and every candidate must stand for the position it is paired with.
    pub fn vote_batch(
        env: Env,
        voter: Address,
        campaign_id: u64,
        votes: Vec<VoteInput>,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        voter.require_auth();

        voting::cast_batch(&env, &voter, campaign_id, &votes)?;
        storage::bump_instance(&env);
        Ok(())
    }

    pub fn get_vote_count(env: Env, campaign_id: u64, candidate_id: u32) -> u64 {
        storage::vote_count(&env, campaign_id, candidate_id)
    }

    /// Every address that voted for the candidate, in vote order. Large
    /// lists should be read with `get_candidate_voters_page`.
    pub fn get_candidate_voters(env: Env, campaign_id: u64, candidate_id: u32) -> Vec<Address> {
        voting::voters(&env, campaign_id, candidate_id)
    }

    pub fn get_candidate_voters_page(
        env: Env,
        campaign_id: u64,
        candidate_id: u32,
        start: u32,
        limit: u32,
    ) -> Vec<Address> {
        voting::voters_page(&env, campaign_id, candidate_id, start, limit)
    }

    pub fn has_voted(env: Env, campaign_id: u64, voter: Address) -> bool {
        storage::has_voted(&env, campaign_id, &voter)
    }

    /// Parallel `(position_ids, candidate_ids)` of the voter's ballot.
    pub fn get_user_votes(env: Env, campaign_id: u64, voter: Address) -> (Vec<u32>, Vec<u32>) {
        voting::user_votes(&env, campaign_id, &voter)
    }

    pub fn get_results(env: Env, campaign_id: u64) -> Vec<CandidateTally> {
        voting::results(&env, campaign_id)
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !storage::is_initialized(env) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_batch;
