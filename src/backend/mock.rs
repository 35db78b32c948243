//! Mock backend implementation for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::backend::errors::BackendResult;
use crate::backend::{MemberListQuery, TeamMemberReader, TeamMemberWriter};
use crate::domain::team_member::{ActionResult, StatusPayload, TeamMemberPayload};
use crate::models::team_member::MemberListResponse;

mock! {
    pub Backend {}

    #[async_trait]
    impl TeamMemberReader for Backend {
        async fn get_team_members(
            &self,
            query: &MemberListQuery,
        ) -> BackendResult<MemberListResponse>;
    }

    #[async_trait]
    impl TeamMemberWriter for Backend {
        async fn create_team_member(&self, data: &TeamMemberPayload) -> BackendResult<ActionResult>;
        async fn update_team_member(
            &self,
            id: &str,
            data: &TeamMemberPayload,
        ) -> BackendResult<ActionResult>;
        async fn update_status(&self, id: &str, data: &StatusPayload) -> BackendResult<ActionResult>;
        async fn delete_team_member(&self, id: &str) -> BackendResult<ActionResult>;
    }
}
