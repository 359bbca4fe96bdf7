use actix_web::{get, HttpResponse};

use crate::models::dto::response::HealthResponse;

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::new("healthy"))
}

#[get("/health/live")]
async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::new("alive"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_endpoints() {
        let app = test::init_service(App::new().service(health_check).service(health_check_live)).await;

        for (uri, status) in [("/health", "healthy"), ("/health/live", "alive")] {
            let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert!(res.status().is_success());

            let body: serde_json::Value = test::read_body_json(res).await;
            assert_eq!(body["status"], status);
            assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        }
    }
}
