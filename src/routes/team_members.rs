use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::backend::TeamMemberBackend;
use crate::dto::team_members::PageQuery;
use crate::models::config::ServerConfig;
use crate::routes::render_template;
use crate::services::team_members as team_members_service;

/// Base path of the JSON endpoints the list widget calls back into.
pub const API_BASE: &str = "/api/v1/team-members";

async fn render_list_page(backend: &dyn TeamMemberBackend, tera: &Tera, lang: &str) -> HttpResponse {
    let initial_data = team_members_service::fetch_page(backend, PageQuery::default()).await;

    let initial_data = match serde_json::to_string(&initial_data) {
        Ok(json) => json,
        Err(err) => {
            log::error!("Failed to serialize initial team members data: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("lang", lang);
    context.insert("initial_data", &initial_data);
    context.insert("api_base", API_BASE);

    render_template(tera, "team_members/list.html", &context)
}

#[get("/admin/team-members/list")]
pub async fn show_team_members(
    backend: web::Data<dyn TeamMemberBackend>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    render_list_page(backend.get_ref(), &tera, &server_config.default_lang).await
}

#[get("/{lang}/admin/team-members/list")]
pub async fn show_team_members_localized(
    lang: web::Path<String>,
    backend: web::Data<dyn TeamMemberBackend>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_list_page(backend.get_ref(), &tera, &lang).await
}
