use serde::{Deserialize, Serialize};

/// A reward ledger entry, produced here and persisted by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    pub user: String,
    /// What earned the reward (e.g. "tracking")
    pub reason: String,
    /// Id of the record the reward is tied to
    pub identifier: String,
    pub xp: i64,
    pub money: i64,
}
