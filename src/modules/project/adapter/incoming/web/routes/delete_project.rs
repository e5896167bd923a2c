use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::{parse_entity_id, ApiResponse};
use crate::AppState;

/// Delete project
///
/// Idempotent: unknown and malformed ids also answer 204.
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id (UUID)")),
    responses(
        (status = 204, description = "Project removed (or never existed)"),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(id) = parse_entity_id(&path.into_inner()) else {
        return ApiResponse::no_content();
    };

    match data.project.delete.execute(id).await {
        Ok(()) => {
            info!(admin = %admin.email(), project_id = %id, "Project deleted");
            ApiResponse::no_content()
        }

        Err(DeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, issue_test_session};
    use crate::tests::support::fixtures::project_fields;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_delete_project_twice_is_204_both_times() {
        // Arrange
        let builder = TestAppStateBuilder::default();
        let token = issue_test_session(&builder).await;
        let existing = builder.seed_project(project_fields("Doomed")).await;
        let app_state = builder.build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_project_handler),
        )
        .await;

        // Act + Assert
        for _ in 0..2 {
            let req = test::TestRequest::delete()
                .uri(&format!("/api/projects/{}", existing.id))
                .insert_header(bearer(&token))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 204);
        }
    }

    #[actix_web::test]
    async fn test_delete_project_malformed_id() {
        let builder = TestAppStateBuilder::default();
        let token = issue_test_session(&builder).await;
        let app_state = builder.build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_project_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/projects/garbage")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 204);
    }

    #[actix_web::test]
    async fn test_delete_project_without_session() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_project_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/projects/garbage")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
