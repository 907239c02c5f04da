use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::testimonial::application::ports::incoming::use_cases::GetTestimonialsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public read: active rows only, never cached.
#[get("/api/public/testimonials")]
pub async fn get_public_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    match data.testimonials.get_list.execute(true).await {
        Ok(testimonials) => ApiResponse::success_no_store(testimonials),

        Err(GetTestimonialsError::RepositoryError(e)) => {
            error!("Repository error listing public testimonials: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::Value;
    use uuid::Uuid;

    use crate::modules::testimonial::application::ports::incoming::use_cases::GetTestimonialsUseCase;
    use crate::modules::testimonial::domain::entities::Testimonial;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

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

    fn sample_testimonial() -> Testimonial {
        Testimonial {
            id: Uuid::new_v4(),
            name: "Ana Costa".to_string(),
            role: "CTO".to_string(),
            company: "Meridian Labs".to_string(),
            quote: "Delivery was ahead of schedule every sprint.".to_string(),
            image: None,
            rating: 5,
            active: true,
            sort_order: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    // No session gate registered: the route must not need one.
    #[actix_web::test]
    async fn public_listing_needs_no_session() {
        let state = TestAppStateBuilder::default()
            .with_get_testimonials(MockGetTestimonialsUseCase {
                result: Ok(vec![sample_testimonial()]),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_public_testimonials_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/public/testimonials")
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["data"][0]["name"], "Ana Costa");
    }

    #[actix_web::test]
    async fn responses_are_marked_uncacheable() {
        let state = TestAppStateBuilder::default()
            .with_get_testimonials(MockGetTestimonialsUseCase {
                result: Ok(vec![]),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_public_testimonials_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/public/testimonials")
            .to_request();

        let resp = test::call_service(&app, req).await;

        let cache_control = resp.headers().get("Cache-Control").unwrap();
        assert_eq!(cache_control, "no-store, no-cache, must-revalidate");
        assert_eq!(resp.headers().get("Pragma").unwrap(), "no-cache");
    }

    #[actix_web::test]
    async fn repository_errors_return_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_get_testimonials(MockGetTestimonialsUseCase {
                result: Err(GetTestimonialsError::RepositoryError("db down".to_string())),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_public_testimonials_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/public/testimonials")
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
