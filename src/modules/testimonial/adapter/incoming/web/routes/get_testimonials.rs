use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::testimonial::application::ports::incoming::use_cases::GetTestimonialsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/testimonials")]
pub async fn get_testimonials_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    // Admin sees inactive rows too.
    match data.testimonials.get_list.execute(false).await {
        Ok(testimonials) => ApiResponse::success(testimonials),

        Err(GetTestimonialsError::RepositoryError(e)) => {
            error!("Repository error listing testimonials: {}", e);
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
    use serde_json::Value;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::auth::application::ports::outgoing::SessionGate;
    use crate::modules::testimonial::application::ports::incoming::use_cases::GetTestimonialsUseCase;
    use crate::modules::testimonial::domain::entities::Testimonial;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubSessionGate;

    struct MockGetTestimonialsUseCase {
        result: Result<Vec<Testimonial>, GetTestimonialsError>,
    }

    #[async_trait]
    impl GetTestimonialsUseCase for MockGetTestimonialsUseCase {
        async fn execute(
            &self,
            _only_active: bool,
        ) -> Result<Vec<Testimonial>, GetTestimonialsError> {
            self.result.clone()
        }
    }

    fn sample_testimonial(name: &str, active: bool) -> Testimonial {
        Testimonial {
            id: Uuid::new_v4(),
            name: name.to_string(),
            role: "CTO".to_string(),
            company: "Meridian Labs".to_string(),
            quote: "Delivery was ahead of schedule every sprint.".to_string(),
            image: None,
            rating: 5,
            active,
            sort_order: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn listing_includes_inactive_rows_and_renames_sort_order() {
        let state = TestAppStateBuilder::default()
            .with_get_testimonials(MockGetTestimonialsUseCase {
                result: Ok(vec![
                    sample_testimonial("Ana Costa", true),
                    sample_testimonial("Ben Okafor", false),
                ]),
            })
            .build();
        let gate: Arc<dyn SessionGate> = Arc::new(StubSessionGate::authorized(Uuid::new_v4()));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(gate))
                .service(get_testimonials_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/testimonials")
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert_eq!(json["data"][0]["order"], 1);
        assert_eq!(json["data"][1]["active"], false);
        assert_eq!(json["data"][0]["image"], Value::Null);
    }

    #[actix_web::test]
    async fn listing_without_token_returns_unauthorized() {
        let state = TestAppStateBuilder::default().build();
        let gate: Arc<dyn SessionGate> = Arc::new(StubSessionGate::anonymous());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(gate))
                .service(get_testimonials_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/testimonials")
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn repository_errors_return_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_get_testimonials(MockGetTestimonialsUseCase {
                result: Err(GetTestimonialsError::RepositoryError("db down".to_string())),
            })
            .build();
        let gate: Arc<dyn SessionGate> = Arc::new(StubSessionGate::authorized(Uuid::new_v4()));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(gate))
                .service(get_testimonials_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/testimonials")
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = read_json(resp).await;
        assert_eq!(json["error"], "An unexpected error occurred");
    }
}
