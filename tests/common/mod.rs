use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, json};

use team_members_admin::backend::errors::{BackendError, BackendResult};
use team_members_admin::backend::{MemberListQuery, TeamMemberReader, TeamMemberWriter};
use team_members_admin::domain::team_member::{
    ActionResult, StatusPayload, StatusSummary, TeamMember, TeamMemberPayload,
};
use team_members_admin::models::team_member::{MemberListResponse, MemberPage};

/// In-memory stand-in for the team-member service recording every call.
#[derive(Default)]
pub struct FakeBackend {
    pub failing: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> BackendResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            Err(BackendError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn ann() -> TeamMember {
    TeamMember {
        id: "1".to_string(),
        name: "Ann".to_string(),
        email: "ann@x.com".to_string(),
        phone: "1".to_string(),
        status: "active".to_string(),
    }
}

#[async_trait]
impl TeamMemberReader for FakeBackend {
    async fn get_team_members(
        &self,
        query: &MemberListQuery,
    ) -> BackendResult<MemberListResponse> {
        self.record(format!(
            "list page={} limit={} search={} filters={}",
            query.page,
            query.limit,
            query.search,
            json!(query.filters)
        ))?;

        Ok(MemberListResponse {
            success: true,
            data: Some(MemberPage {
                docs: vec![ann()],
                total_docs: 1,
                status_summary: StatusSummary {
                    active: 1,
                    pending: 0,
                    inactive: 0,
                },
            }),
        })
    }
}

#[async_trait]
impl TeamMemberWriter for FakeBackend {
    async fn create_team_member(&self, data: &TeamMemberPayload) -> BackendResult<ActionResult> {
        self.record(format!("create {}", json!(data)))?;
        Ok(ActionResult {
            success: true,
            extra: Map::new(),
        })
    }

    async fn update_team_member(
        &self,
        id: &str,
        data: &TeamMemberPayload,
    ) -> BackendResult<ActionResult> {
        self.record(format!("update {id} {}", json!(data)))?;
        Ok(ActionResult {
            success: true,
            extra: Map::new(),
        })
    }

    async fn update_status(&self, id: &str, data: &StatusPayload) -> BackendResult<ActionResult> {
        self.record(format!("status {id} {}", json!(data)))?;
        Ok(ActionResult {
            success: true,
            extra: Map::new(),
        })
    }

    async fn delete_team_member(&self, id: &str) -> BackendResult<ActionResult> {
        self.record(format!("delete {id}"))?;
        Ok(ActionResult {
            success: true,
            extra: Map::new(),
        })
    }
}
