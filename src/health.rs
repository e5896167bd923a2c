use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::auth::application::ports::outgoing::SessionStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    session_store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the database and the session store
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    sessions: web::Data<Arc<dyn SessionStore + Send + Sync>>,
) -> impl Responder {
    let database = match db.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(error = %e, "Database readiness check failed");
            "unhealthy"
        }
    };

    let session_store = match sessions.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(error = %e, "Session store readiness check failed");
            "unhealthy"
        }
    };

    if database == "ok" && session_store == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database,
            session_store,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database,
            session_store,
        })
    }
}
