#[cfg(feature = "server")]
use std::sync::Arc;
#[cfg(feature = "server")]
use std::time::Duration;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::backend::{HttpTeamMemberBackend, TeamMemberBackend};
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::api::{
    api_v1_create_team_member, api_v1_delete_team_member, api_v1_team_members,
    api_v1_update_status, api_v1_update_team_member,
};
#[cfg(feature = "server")]
use crate::routes::team_members::{show_team_members, show_team_members_localized};

#[cfg(feature = "server")]
pub mod backend;
pub mod domain;
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds the team-member service client described by the configuration.
#[cfg(feature = "server")]
pub fn build_backend(server_config: &ServerConfig) -> std::io::Result<HttpTeamMemberBackend> {
    let backend = HttpTeamMemberBackend::new(
        &server_config.team_member_service_url,
        Duration::from_secs(server_config.request_timeout_secs),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build team member client: {e}")))?;

    Ok(match &server_config.team_member_service_token {
        Some(token) => backend.with_token(token),
        None => backend,
    })
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // One client per process, shared by every worker.
    let backend: Arc<dyn TeamMemberBackend> = Arc::new(build_backend(&server_config)?);
    let backend = web::Data::from(backend);

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving team members admin on {}:{} against {}",
        bind_address.0,
        bind_address.1,
        server_config.team_member_service_url
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &server_config.assets_dir))
            .service(
                web::scope("/api")
                    .service(api_v1_team_members)
                    .service(api_v1_create_team_member)
                    .service(api_v1_update_team_member)
                    .service(api_v1_update_status)
                    .service(api_v1_delete_team_member),
            )
            .service(show_team_members)
            .service(show_team_members_localized)
            .app_data(web::Data::new(tera.clone()))
            .app_data(backend.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
