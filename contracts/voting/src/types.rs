use soroban_sdk::{contracttype, Address, Env, String};

/// Lifecycle phase of a campaign, derived from the ledger clock.
///
/// ```text
/// Upcoming ──► Active ──► Ended
/// ```
///
/// Never stored; see [`CampaignStatus::at`].
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum CampaignStatus {
    /// `now < start_time`: ballot structure may still be edited.
    Upcoming = 0,
    /// `start_time <= now <= end_time`: votes are accepted.
    Active = 1,
    /// `now > end_time`: tallies are final.
    Ended = 2,
}

impl CampaignStatus {
    /// Status of a campaign spanning the closed interval `[start, end]` at `now`.
    pub fn at(now: u64, start: u64, end: u64) -> Self {
        if now < start {
            CampaignStatus::Upcoming
        } else if now > end {
            CampaignStatus::Ended
        } else {
            CampaignStatus::Active
        }
    }
}

/// Stored campaign record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u64,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub start_time: u64,
    pub end_time: u64,
    pub is_active: bool,
    pub position_count: u32,
    pub candidate_count: u32,
    pub created_at: u64,
}

impl Campaign {
    pub fn status(&self, now: u64) -> CampaignStatus {
        CampaignStatus::at(now, self.start_time, self.end_time)
    }
}

/// Read view returned by `get_campaign_info`. Unknown ids produce the
/// zero-valued view with `exists == false`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignInfo {
    pub title: String,
    pub description: String,
    pub start_time: u64,
    pub end_time: u64,
    pub is_active: bool,
    pub position_count: u32,
    pub candidate_count: u32,
    pub exists: bool,
}

impl CampaignInfo {
    pub fn missing(env: &Env) -> Self {
        CampaignInfo {
            title: String::from_str(env, ""),
            description: String::from_str(env, ""),
            start_time: 0,
            end_time: 0,
            is_active: false,
            position_count: 0,
            candidate_count: 0,
            exists: false,
        }
    }
}

impl From<Campaign> for CampaignInfo {
    fn from(c: Campaign) -> Self {
        CampaignInfo {
            title: c.title,
            description: c.description,
            start_time: c.start_time,
            end_time: c.end_time,
            is_active: c.is_active,
            position_count: c.position_count,
            candidate_count: c.candidate_count,
            exists: true,
        }
    }
}

/// A contestable seat within a campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub name: String,
    pub description: String,
    pub exists: bool,
}

impl Position {
    pub fn missing(env: &Env) -> Self {
        Position {
            name: String::from_str(env, ""),
            description: String::from_str(env, ""),
            exists: false,
        }
    }
}

/// An entrant registered against exactly one position.
///
/// `metadata` is opaque to the ledger (clients store a JSON bio/image blob).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub metadata: String,
    pub position_id: u32,
    pub exists: bool,
}

impl Candidate {
    pub fn missing(env: &Env) -> Self {
        Candidate {
            name: String::from_str(env, ""),
            metadata: String::from_str(env, ""),
            position_id: 0,
            exists: false,
        }
    }
}

/// Input for batch position creation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionInput {
    pub name: String,
    pub description: String,
}

/// Input for batch candidate registration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateInput {
    pub position_id: u32,
    pub name: String,
    pub metadata: String,
}

/// One entry of a ballot submitted through `vote_batch`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteInput {
    pub position_id: u32,
    pub candidate_id: u32,
}

/// Per-candidate line of `get_results`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateTally {
    pub candidate_id: u32,
    pub position_id: u32,
    pub votes: u64,
}
