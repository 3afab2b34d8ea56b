//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// "postgres" or "memory" - tells operators at a glance whether posts
    /// survive a restart.
    pub storage: &'static str,
    pub timestamp: String,
}

/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use serde_json::Value;

    use quill_infra::InMemoryPostRepository;

    use crate::state::AppState;

    #[actix_web::test]
    async fn health_reports_active_storage() {
        let state = AppState::with_repository(Arc::new(InMemoryPostRepository::new()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
        assert!(body["timestamp"].is_string());
    }
}
