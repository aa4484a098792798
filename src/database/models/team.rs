use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single participant, either captain or regular member of a team.
///
/// `srn` and `email` are intended-unique across the whole store (captain and
/// member roles of every team). `wallet_address` is filled in by the wallet
/// creation flow and plays no part in duplicate detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub srn: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
}

/// A stored team registration. Immutable once inserted; there is no update or
/// delete path in this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: Uuid,
    pub team_name: String,
    pub captain: Member,
    pub members: Vec<Member>,
    pub idea: String,
    pub idea_description: String,
    pub created_at: DateTime<Utc>, // TIMESTAMPTZ
}

/// Incoming registration payload. `createdAt` and the id are assigned at
/// insert time, never accepted from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInput {
    pub team_name: String,
    pub captain: Member,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub idea: String,
    #[serde(default)]
    pub idea_description: String,
}

impl TeamInput {
    /// Captain followed by the regular members, in submission order.
    pub fn roster(&self) -> impl Iterator<Item = &Member> {
        std::iter::once(&self.captain).chain(self.members.iter())
    }
}

impl TeamRecord {
    pub fn roster(&self) -> impl Iterator<Item = &Member> {
        std::iter::once(&self.captain).chain(self.members.iter())
    }
}
