//! Compile-time tunables for the voting ledger.

/// Remaining-TTL (in ledgers) below which a touched entry gets bumped.
/// Roughly 30 days at 5s ledgers.
pub const TTL_THRESHOLD: u32 = 518_400;

/// TTL (in ledgers) an entry is extended to once bumped. Roughly 180 days.
pub const TTL_EXTEND_TO: u32 = 3_110_400;

/// Upper bound on entries accepted by any batch entry point
/// (`add_positions`, `register_candidates_batch`, `vote_batch`).
pub const MAX_BATCH_SIZE: u32 = 100;

/// Interface version reported by `version()`.
pub const CONTRACT_VERSION: u32 = 1;
