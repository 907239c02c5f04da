use actix_web::{put, web, Responder};
use serde_json::Value;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::content::application::ports::incoming::use_cases::{
    UpsertContentCommand, UpsertContentError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Upsert: the body is the whole section document, written as-is.
#[put("/api/admin/content/{section}")]
pub async fn update_content_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> impl Responder {
    let command = match UpsertContentCommand::new(path.into_inner(), payload.into_inner()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.content.upsert.execute(command).await {
        Ok(content) => ApiResponse::success(content),

        Err(UpsertContentError::RepositoryError(e)) => {
            error!("Repository error upserting site content: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::auth::application::ports::outgoing::SessionGate;
    use crate::modules::content::application::ports::incoming::use_cases::UpsertContentUseCase;
    use crate::modules::content::domain::entities::SiteContent;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubSessionGate;

    struct MockUpsertContentUseCase {
        result: Result<SiteContent, UpsertContentError>,
        seen: Arc<Mutex<Option<UpsertContentCommand>>>,
    }

    #[async_trait]
    impl UpsertContentUseCase for MockUpsertContentUseCase {
        async fn execute(
            &self,
            command: UpsertContentCommand,
        ) -> Result<SiteContent, UpsertContentError> {
            *self.seen.lock().unwrap() = Some(command);
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn upserting_forwards_the_section_and_document() {
        let seen = Arc::new(Mutex::new(None));
        let state = TestAppStateBuilder::default()
            .with_upsert_content(MockUpsertContentUseCase {
                result: Ok(SiteContent {
                    section: "hero".to_string(),
                    content: json!({"headline": "We ship"}),
                    updated_at: Utc::now(),
                }),
                seen: Arc::clone(&seen),
            })
            .build();
        let gate: Arc<dyn SessionGate> = Arc::new(StubSessionGate::authorized(Uuid::new_v4()));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(gate))
                .service(update_content_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/content/hero")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(json!({"headline": "We ship"}))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let command = seen.lock().unwrap().clone().unwrap();
        assert_eq!(command.section, "hero");
        assert_eq!(command.document["headline"], "We ship");
    }

    #[actix_web::test]
    async fn an_unknown_section_is_rejected() {
        let state = TestAppStateBuilder::default().build();
        let gate: Arc<dyn SessionGate> = Arc::new(StubSessionGate::authorized(Uuid::new_v4()));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(gate))
                .service(update_content_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/content/sidebar")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(json!({"anything": true}))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn upserting_without_token_returns_unauthorized() {
        let state = TestAppStateBuilder::default().build();
        let gate: Arc<dyn SessionGate> = Arc::new(StubSessionGate::anonymous());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(gate))
                .service(update_content_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/content/hero")
            .set_json(json!({"headline": "Defaced"}))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
