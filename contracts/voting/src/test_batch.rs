#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::arithmetic_side_effects
)]

use super::{
    config::MAX_BATCH_SIZE, CandidateInput, ContractError, PositionInput, VotingContractClient,
};
use crate::test::{create_default_campaign, setup, HOUR, NOW};
use soroban_sdk::{testutils::Ledger as _, Env, String, Vec};

// ── Helpers ──────────────────────────────────────────────────────

fn position(env: &Env, name: &str, description: &str) -> PositionInput {
    PositionInput {
        name: String::from_str(env, name),
        description: String::from_str(env, description),
    }
}

fn candidate(env: &Env, position_id: u32, name: &str) -> CandidateInput {
    CandidateInput {
        position_id,
        name: String::from_str(env, name),
        metadata: String::from_str(env, "{}"),
    }
}

fn campaign_with_two_positions(env: &Env, client: &VotingContractClient) -> u64 {
    let id = create_default_campaign(env, client);
    let mut inputs = Vec::new(env);
    inputs.push_back(position(env, "President", "Campaign President"));
    inputs.push_back(position(env, "Secretary", "Campaign Secretary"));
    client.add_positions(&id, &inputs);
    id
}

// ======================== Batch positions ========================

#[test]
fn test_add_positions_multiple() {
    let (env, client, _owner) = setup();
    let id = create_default_campaign(&env, &client);

    let mut inputs = Vec::new(&env);
    inputs.push_back(position(&env, "President", "Campaign President"));
    inputs.push_back(position(&env, "Secretary", "Campaign Secretary"));
    inputs.push_back(position(&env, "Treasurer", "Campaign Treasurer"));

    let ids = client.add_positions(&id, &inputs);
    assert_eq!(ids.len(), 3);
    assert_eq!(client.get_campaign_info(&id).position_count, 3);

    for (i, input) in inputs.iter().enumerate() {
        let position_id = (i as u32) + 1;
        assert_eq!(ids.get(i as u32).unwrap(), position_id);
        let stored = client.get_position(&id, &position_id);
        assert!(stored.exists);
        assert_eq!(stored.name, input.name);
        assert_eq!(stored.description, input.description);
    }
}

#[test]
fn test_add_positions_empty_is_noop() {
    let (env, client, _owner) = setup();
    let id = create_default_campaign(&env, &client);

    let ids = client.add_positions(&id, &Vec::new(&env));
    assert_eq!(ids.len(), 0);
    assert_eq!(client.get_campaign_info(&id).position_count, 0);
}

#[test]
fn test_add_positions_duplicate_names_allowed() {
    let (env, client, _owner) = setup();
    let id = create_default_campaign(&env, &client);

    let mut inputs = Vec::new(&env);
    inputs.push_back(position(&env, "President", "Campaign President"));
    inputs.push_back(position(&env, "President", "Another President"));
    client.add_positions(&id, &inputs);

    assert_eq!(client.get_campaign_info(&id).position_count, 2);
    let p1 = client.get_position(&id, &1);
    let p2 = client.get_position(&id, &2);
    assert_eq!(p1.name, String::from_str(&env, "President"));
    assert_eq!(p2.name, String::from_str(&env, "President"));
    assert_eq!(p2.description, String::from_str(&env, "Another President"));
}

#[test]
fn test_add_positions_continues_after_single() {
    let (env, client, _owner) = setup();
    let id = create_default_campaign(&env, &client);

    client.add_position(
        &id,
        &String::from_str(&env, "Single Position"),
        &String::from_str(&env, "Test"),
    );

    let mut inputs = Vec::new(&env);
    for name in ["Position 1", "Position 2", "Position 3"] {
        inputs.push_back(position(&env, name, "Description"));
    }
    let ids = client.add_positions(&id, &inputs);
    assert_eq!(ids.get(0).unwrap(), 2);
    assert_eq!(ids.get(2).unwrap(), 4);
    assert_eq!(client.get_positions(&id).len(), 4);
}

#[test]
fn test_add_positions_bad_entry_rejects_batch() {
    let (env, client, _owner) = setup();
    let id = create_default_campaign(&env, &client);

    let mut inputs = Vec::new(&env);
    inputs.push_back(position(&env, "President", "Campaign President"));
    inputs.push_back(position(&env, "", "Nameless"));

    let result = client.try_add_positions(&id, &inputs);
    assert_eq!(result.err().unwrap().unwrap(), ContractError::EmptyPositionField);
    assert_eq!(client.get_campaign_info(&id).position_count, 0);
    assert!(!client.get_position(&id, &1).exists);
}

#[test]
fn test_add_positions_after_start_fails() {
    let (env, client, _owner) = setup();
    let id = create_default_campaign(&env, &client);
    env.ledger().set_timestamp(NOW + HOUR + 1);

    let mut inputs = Vec::new(&env);
    inputs.push_back(position(&env, "President", "Campaign President"));
    let result = client.try_add_positions(&id, &inputs);
    assert_eq!(result.err().unwrap().unwrap(), ContractError::PositionsAfterStart);

    // Even an empty batch is refused once the window has closed.
    let result = client.try_add_positions(&id, &Vec::new(&env));
    assert_eq!(result.err().unwrap().unwrap(), ContractError::PositionsAfterStart);
}

#[test]
fn test_add_positions_too_large() {
    let (env, client, _owner) = setup();
    let id = create_default_campaign(&env, &client);

    let mut inputs = Vec::new(&env);
    for _ in 0..=MAX_BATCH_SIZE {
        inputs.push_back(position(&env, "Seat", "Board seat"));
    }
    let result = client.try_add_positions(&id, &inputs);
    assert_eq!(result.err().unwrap().unwrap(), ContractError::BatchTooLarge);
}

// ======================== Batch candidates ========================

#[test]
fn test_register_candidates_batch() {
    let (env, client, _owner) = setup();
    let id = campaign_with_two_positions(&env, &client);

    let mut inputs = Vec::new(&env);
    inputs.push_back(CandidateInput {
        position_id: 1,
        name: String::from_str(&env, "John Doe"),
        metadata: String::from_str(
            &env,
            "{\"bio\":\"Experienced leader\",\"imageUrl\":\"https://example.com/john.jpg\"}",
        ),
    });
    inputs.push_back(CandidateInput {
        position_id: 2,
        name: String::from_str(&env, "Jane Smith"),
        metadata: String::from_str(
            &env,
            "{\"bio\":\"Dedicated secretary\",\"imageUrl\":\"https://example.com/jane.jpg\"}",
        ),
    });

    let ids = client.register_candidates_batch(&id, &inputs);
    assert_eq!(ids.len(), 2);
    assert_eq!(client.get_campaign_info(&id).candidate_count, 2);

    let c1 = client.get_candidate(&id, &1);
    assert_eq!(c1.name, String::from_str(&env, "John Doe"));
    assert_eq!(c1.position_id, 1);
    assert!(c1.exists);

    let c2 = client.get_candidate(&id, &2);
    assert_eq!(c2.name, String::from_str(&env, "Jane Smith"));
    assert_eq!(c2.position_id, 2);
    assert!(c2.exists);
}

#[test]
fn test_register_candidates_batch_unknown_position_reverts_all() {
    let (env, client, _owner) = setup();
    let id = campaign_with_two_positions(&env, &client);

    let mut inputs = Vec::new(&env);
    inputs.push_back(candidate(&env, 1, "Valid Candidate"));
    inputs.push_back(candidate(&env, 999, "Invalid Candidate"));

    let result = client.try_register_candidates_batch(&id, &inputs);
    assert_eq!(result.err().unwrap().unwrap(), ContractError::PositionNotFound);

    assert_eq!(client.get_campaign_info(&id).candidate_count, 0);
    assert!(!client.get_candidate(&id, &1).exists);
}

#[test]
fn test_register_candidates_batch_empty_is_noop() {
    let (env, client, _owner) = setup();
    let id = campaign_with_two_positions(&env, &client);

    let ids = client.register_candidates_batch(&id, &Vec::new(&env));
    assert_eq!(ids.len(), 0);
    assert_eq!(client.get_campaign_info(&id).candidate_count, 0);
}

#[test]
fn test_register_candidates_batch_continues_ids() {
    let (env, client, _owner) = setup();
    let id = campaign_with_two_positions(&env, &client);

    client.register_candidate(
        &id,
        &1,
        &String::from_str(&env, "Single Candidate"),
        &String::from_str(&env, "{}"),
    );

    let mut inputs = Vec::new(&env);
    for name in ["Candidate 1", "Candidate 2", "Candidate 3", "Candidate 4", "Candidate 5"] {
        inputs.push_back(candidate(&env, 1, name));
    }
    let ids = client.register_candidates_batch(&id, &inputs);
    assert_eq!(ids.len(), 5);
    assert_eq!(ids.get(0).unwrap(), 2);
    assert_eq!(ids.get(4).unwrap(), 6);
    assert_eq!(client.get_campaign_info(&id).candidate_count, 6);
    assert_eq!(client.get_candidates_for_position(&id, &1).len(), 6);
    assert_eq!(client.get_candidates_for_position(&id, &2).len(), 0);
}

#[test]
fn test_register_candidates_batch_unknown_campaign() {
    let (env, client, _owner) = setup();

    let mut inputs = Vec::new(&env);
    inputs.push_back(candidate(&env, 1, "Nobody"));
    let result = client.try_register_candidates_batch(&3, &inputs);
    assert_eq!(result.err().unwrap().unwrap(), ContractError::CampaignNotFound);
}

#[test]
fn test_positions_are_scoped_per_campaign() {
    let (env, client, _owner) = setup();
    let first = campaign_with_two_positions(&env, &client);
    let second = create_default_campaign(&env, &client);

    // Position 1 exists in the first campaign only.
    let mut inputs = Vec::new(&env);
    inputs.push_back(candidate(&env, 1, "Cross Campaign"));
    let result = client.try_register_candidates_batch(&second, &inputs);
    assert_eq!(result.err().unwrap().unwrap(), ContractError::PositionNotFound);

    let ids = client.register_candidates_batch(&first, &inputs);
    assert_eq!(ids.get(0).unwrap(), 1);
}
