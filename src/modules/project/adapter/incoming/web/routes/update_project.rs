use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::adapter::incoming::web::routes::ProjectRequest;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::shared::api::{json_body, parse_entity_id, ApiResponse, JsonBody};
use crate::AppState;

/// Replace project
///
/// Every field is overwritten. Unknown or malformed ids are 404.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id (UUID)")),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Missing or blank required field", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (
            status = 404,
            description = "Project not found",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PROJECT_NOT_FOUND", "message": "Project not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    admin: AdminSession,
    path: web::Path<String>,
    req: JsonBody<ProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = match json_body(req) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    let Some(id) = parse_entity_id(&path.into_inner()) else {
        return ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found");
    };

    let fields = match req.into_fields() {
        Ok(fields) => fields,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.project.update.execute(id, fields).await {
        Ok(updated) => {
            info!(admin = %admin.email(), project_id = %id, "Project updated");
            ApiResponse::success(updated)
        }

        Err(UpdateProjectError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project {}: {}", id, e);
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
    use uuid::Uuid;

    fn body() -> serde_json::Value {
        serde_json::json!({
            "title": "Renamed",
            "description": "new desc",
            "tags": ["Go"],
            "imageUrl": "new.png"
        })
    }

    #[actix_web::test]
    async fn test_update_project_replaces_fields() {
        // Arrange
        let builder = TestAppStateBuilder::default();
        let token = issue_test_session(&builder).await;
        let existing = builder.seed_project(project_fields("Original")).await;
        let app_state = builder.build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_project_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::put()
            .uri(&format!("/api/projects/{}", existing.id))
            .insert_header(bearer(&token))
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], existing.id.to_string());
        assert_eq!(body["data"]["title"], "Renamed");
        assert_eq!(body["data"]["tags"], serde_json::json!(["Go"]));
        assert!(body["data"]["githubUrl"].is_null());
    }

    #[actix_web::test]
    async fn test_update_project_unknown_id() {
        let builder = TestAppStateBuilder::default();
        let token = issue_test_session(&builder).await;
        let app_state = builder.build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/projects/{}", Uuid::new_v4()))
            .insert_header(bearer(&token))
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_update_project_malformed_id_is_not_found() {
        let builder = TestAppStateBuilder::default();
        let token = issue_test_session(&builder).await;
        let projects = builder.project_repository();
        let app_state = builder.build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/projects/not-a-uuid")
            .insert_header(bearer(&token))
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        assert_eq!(projects.calls(), 0);
    }
}
