//! reqwest implementation of the team-member backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::backend::errors::{BackendError, BackendResult};
use crate::backend::{MemberListQuery, TeamMemberReader, TeamMemberWriter};
use crate::domain::team_member::{ActionResult, StatusPayload, TeamMemberPayload};
use crate::models::team_member::MemberListResponse;

const COLLECTION: &str = "team-members";

/// Talks JSON over HTTP to the external team-member service.
#[derive(Clone, Debug)]
pub struct HttpTeamMemberBackend {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpTeamMemberBackend {
    pub fn new(base_url: &str, timeout: Duration) -> BackendResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| BackendError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Attaches `token` as a bearer credential to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, segments: &[&str]) -> BackendResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(COLLECTION)
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.client.request(method, url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

fn list_params(query: &MemberListQuery) -> BackendResult<Vec<(&'static str, String)>> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("limit", query.limit.to_string()),
    ];
    if !query.search.is_empty() {
        params.push(("search", query.search.clone()));
    }
    if let Some(filters) = &query.filters {
        let encoded =
            serde_json::to_string(filters).map_err(|e| BackendError::Decode(e.to_string()))?;
        params.push(("filters", encoded));
    }
    Ok(params)
}

#[async_trait]
impl TeamMemberReader for HttpTeamMemberBackend {
    async fn get_team_members(
        &self,
        query: &MemberListQuery,
    ) -> BackendResult<MemberListResponse> {
        let url = self.url(&[])?;
        let response = self
            .request(Method::GET, url)
            .query(&list_params(query)?)
            .send()
            .await?;

        Self::read_json(response).await
    }
}

#[async_trait]
impl TeamMemberWriter for HttpTeamMemberBackend {
    async fn create_team_member(&self, data: &TeamMemberPayload) -> BackendResult<ActionResult> {
        let url = self.url(&[])?;
        let response = self.request(Method::POST, url).json(data).send().await?;

        Self::read_json(response).await
    }

    async fn update_team_member(
        &self,
        id: &str,
        data: &TeamMemberPayload,
    ) -> BackendResult<ActionResult> {
        let url = self.url(&[id])?;
        let response = self.request(Method::PUT, url).json(data).send().await?;

        Self::read_json(response).await
    }

    async fn update_status(&self, id: &str, data: &StatusPayload) -> BackendResult<ActionResult> {
        let url = self.url(&[id, "status"])?;
        let response = self.request(Method::PATCH, url).json(data).send().await?;

        Self::read_json(response).await
    }

    async fn delete_team_member(&self, id: &str) -> BackendResult<ActionResult> {
        let url = self.url(&[id])?;
        let response = self.request(Method::DELETE, url).send().await?;

        Self::read_json(response).await
    }
}
