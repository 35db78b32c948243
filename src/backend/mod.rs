//! Client side of the external team-member service.

use async_trait::async_trait;
use serde_json::Value;

use crate::backend::errors::BackendResult;
use crate::domain::team_member::{ActionResult, StatusPayload, TeamMemberPayload};
use crate::dto::team_members::PageQuery;
use crate::models::team_member::MemberListResponse;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::HttpTeamMemberBackend;

#[derive(Debug, Clone, PartialEq)]
pub struct MemberListQuery {
    pub page: usize,
    pub limit: usize,
    pub search: String,
    pub filters: Option<Value>,
}

impl MemberListQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            search: String::new(),
            filters: None,
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn filters(mut self, filters: Option<Value>) -> Self {
        self.filters = filters;
        self
    }
}

impl From<&PageQuery> for MemberListQuery {
    fn from(query: &PageQuery) -> Self {
        Self::new(query.page, query.page_size)
            .search(query.search.clone())
            .filters(query.filters.clone())
    }
}

#[async_trait]
pub trait TeamMemberReader: Send + Sync {
    async fn get_team_members(&self, query: &MemberListQuery)
    -> BackendResult<MemberListResponse>;
}

#[async_trait]
pub trait TeamMemberWriter: Send + Sync {
    async fn create_team_member(&self, data: &TeamMemberPayload) -> BackendResult<ActionResult>;
    async fn update_team_member(
        &self,
        id: &str,
        data: &TeamMemberPayload,
    ) -> BackendResult<ActionResult>;
    async fn update_status(&self, id: &str, data: &StatusPayload) -> BackendResult<ActionResult>;
    async fn delete_team_member(&self, id: &str) -> BackendResult<ActionResult>;
}

/// Full backend surface injected into the HTTP handlers.
pub trait TeamMemberBackend: TeamMemberReader + TeamMemberWriter {}

impl<T> TeamMemberBackend for T where T: TeamMemberReader + TeamMemberWriter {}
