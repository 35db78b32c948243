//! Wire shapes of the team-member service list endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::team_member::{StatusSummary, TeamMember, null_as_default};

/// Envelope returned by the list endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct MemberListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<MemberPage>,
}

/// One page of members with the aggregate counts over the whole collection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemberPage {
    pub docs: Vec<TeamMember>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_docs: u64,
    #[serde(default, alias = "statsSummary", deserialize_with = "null_as_default")]
    pub status_summary: StatusSummary,
}
