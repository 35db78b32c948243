//! Page controller for the team member list.
//!
//! Every operation catches backend failures at its own boundary: a failed
//! fetch yields [`PageResult::empty`] and a failed mutation yields
//! [`ActionResult::failure`], each after a single log line.

use crate::backend::{MemberListQuery, TeamMemberReader, TeamMemberWriter};
use crate::domain::team_member::{ActionResult, StatusPayload, TeamMemberPayload};
use crate::dto::team_members::{PageQuery, PageResult};

/// Fetches one page of members and reshapes it for the list widget.
pub async fn fetch_page<R>(repo: &R, query: PageQuery) -> PageResult
where
    R: TeamMemberReader + ?Sized,
{
    match repo.get_team_members(&MemberListQuery::from(&query)).await {
        Ok(response) => match response.data {
            Some(data) if response.success => PageResult::from_page(data, query.page),
            _ => {
                log::warn!("Team member service returned no data for page {}", query.page);
                PageResult::empty()
            }
        },
        Err(err) => {
            log::error!("Failed to fetch team members: {err}");
            PageResult::empty()
        }
    }
}

pub async fn create_team_member<R>(repo: &R, data: &TeamMemberPayload) -> ActionResult
where
    R: TeamMemberWriter + ?Sized,
{
    repo.create_team_member(data).await.unwrap_or_else(|err| {
        log::error!("Failed to create team member: {err}");
        ActionResult::failure()
    })
}

pub async fn update_team_member<R>(repo: &R, id: &str, data: &TeamMemberPayload) -> ActionResult
where
    R: TeamMemberWriter + ?Sized,
{
    repo.update_team_member(id, data)
        .await
        .unwrap_or_else(|err| {
            log::error!("Failed to update team member {id}: {err}");
            ActionResult::failure()
        })
}

pub async fn update_status<R>(repo: &R, id: &str, data: &StatusPayload) -> ActionResult
where
    R: TeamMemberWriter + ?Sized,
{
    repo.update_status(id, data).await.unwrap_or_else(|err| {
        log::error!("Failed to update status of team member {id}: {err}");
        ActionResult::failure()
    })
}

pub async fn delete_team_member<R>(repo: &R, id: &str) -> ActionResult
where
    R: TeamMemberWriter + ?Sized,
{
    repo.delete_team_member(id).await.unwrap_or_else(|err| {
        log::error!("Failed to delete team member {id}: {err}");
        ActionResult::failure()
    })
}
