use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::technology::application::ports::incoming::use_cases::DeleteTechnologyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/technologies/{technology_id}")]
pub async fn delete_technology_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let technology_id = path.into_inner();

    match data.technologies.delete.execute(technology_id).await {
        Ok(()) => ApiResponse::ok(),

        Err(DeleteTechnologyError::NotFound) => ApiResponse::not_found(),

        Err(DeleteTechnologyError::RepositoryError(e)) => {
            error!(
                "Repository error deleting technology {}: {}",
                technology_id, e
            );
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Arc;

    use crate::modules::auth::application::ports::outgoing::SessionGate;
    use crate::modules::technology::application::ports::incoming::use_cases::DeleteTechnologyUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubSessionGate;

    struct MockDeleteTechnologyUseCase {
        result: Result<(), DeleteTechnologyError>,
    }

    #[async_trait]
    impl DeleteTechnologyUseCase for MockDeleteTechnologyUseCase {
        async fn execute(&self, _technology_id: Uuid) -> Result<(), DeleteTechnologyError> {
            self.result.clone()
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    fn bearer() -> (&'static str, &'static str) {
        ("Authorization", "Bearer test-token")
    }

    #[actix_web::test]
    async fn delete_returns_bare_success() {
        let state = TestAppStateBuilder::default()
            .with_delete_technology(MockDeleteTechnologyUseCase { result: Ok(()) })
            .build();
        let gate: Arc<dyn SessionGate> = Arc::new(StubSessionGate::authorized(Uuid::new_v4()));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(gate))
                .service(delete_technology_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/technologies/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert!(json.get("data").is_none());
    }

    #[actix_web::test]
    async fn unknown_id_returns_not_found() {
        let state = TestAppStateBuilder::default()
            .with_delete_technology(MockDeleteTechnologyUseCase {
                result: Err(DeleteTechnologyError::NotFound),
            })
            .build();
        let gate: Arc<dyn SessionGate> = Arc::new(StubSessionGate::authorized(Uuid::new_v4()));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(gate))
                .service(delete_technology_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/technologies/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
