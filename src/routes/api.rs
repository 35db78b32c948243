use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::backend::TeamMemberBackend;
use crate::domain::team_member::{StatusPayload, TeamMemberPayload};
use crate::dto::team_members::PageQuery;
use crate::forms::team_members::TeamMembersQueryForm;
use crate::services::team_members as team_members_service;

#[get("/v1/team-members")]
pub async fn api_v1_team_members(
    web::Query(form): web::Query<TeamMembersQueryForm>,
    backend: web::Data<dyn TeamMemberBackend>,
) -> impl Responder {
    let query = match PageQuery::try_from(form) {
        Ok(query) => query,
        Err(err) => {
            log::warn!("Rejected team members query: {err}");
            return HttpResponse::BadRequest().body(err.to_string());
        }
    };

    let result = team_members_service::fetch_page(backend.get_ref(), query).await;
    HttpResponse::Ok().json(result)
}

#[post("/v1/team-members")]
pub async fn api_v1_create_team_member(
    backend: web::Data<dyn TeamMemberBackend>,
    web::Json(data): web::Json<TeamMemberPayload>,
) -> impl Responder {
    let result = team_members_service::create_team_member(backend.get_ref(), &data).await;
    HttpResponse::Ok().json(result)
}

#[put("/v1/team-members/{id}")]
pub async fn api_v1_update_team_member(
    id: web::Path<String>,
    backend: web::Data<dyn TeamMemberBackend>,
    web::Json(data): web::Json<TeamMemberPayload>,
) -> impl Responder {
    let result = team_members_service::update_team_member(backend.get_ref(), &id, &data).await;
    HttpResponse::Ok().json(result)
}

#[put("/v1/team-members/{id}/status")]
pub async fn api_v1_update_status(
    id: web::Path<String>,
    backend: web::Data<dyn TeamMemberBackend>,
    web::Json(data): web::Json<StatusPayload>,
) -> impl Responder {
    let result = team_members_service::update_status(backend.get_ref(), &id, &data).await;
    HttpResponse::Ok().json(result)
}

#[delete("/v1/team-members/{id}")]
pub async fn api_v1_delete_team_member(
    id: web::Path<String>,
    backend: web::Data<dyn TeamMemberBackend>,
) -> impl Responder {
    let result = team_members_service::delete_team_member(backend.get_ref(), &id).await;
    HttpResponse::Ok().json(result)
}
