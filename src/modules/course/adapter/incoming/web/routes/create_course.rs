use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::course::application::ports::incoming::use_cases::{
    CreateCourseCommand, CreateCourseError, CreateCourseInput,
};
use crate::modules::course::domain::entities::CurriculumSection;
use crate::shared::api::ApiResponse;
use crate::AppState;

// ────────────────────────────────────────────
// Request DTO
// ────────────────────────────────────────────

/// Every field optional so missing values land in the per-field error
/// list instead of failing deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub duration: Option<String>,
    pub projects: Option<i32>,
    pub modes: Option<Vec<String>>,
    pub price_online: Option<f64>,
    pub price_offline: Option<f64>,
    pub icon: Option<String>,
    pub gradient: Option<String>,
    pub curriculum: Option<Vec<CurriculumSection>>,
    pub tools: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub popular: Option<bool>,
    pub active: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

// ────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────

#[post("/api/admin/courses")]
pub async fn create_course_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateCourseRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateCourseCommand::new(CreateCourseInput {
        title: payload.title,
        short_description: payload.short_description,
        category: payload.category,
        level: payload.level,
        duration: payload.duration,
        projects: payload.projects,
        modes: payload.modes,
        price_online: payload.price_online,
        price_offline: payload.price_offline,
        icon: payload.icon,
        gradient: payload.gradient,
        curriculum: payload.curriculum,
        tools: payload.tools,
        features: payload.features,
        popular: payload.popular,
        active: payload.active,
        sort_order: payload.sort_order,
    }) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.courses.create.execute(command).await {
        Ok(course) => ApiResponse::created(course),

        Err(CreateCourseError::RepositoryError(e)) => {
            error!("Repository error creating course: {}", e);
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
    use serde_json::{json, Value};
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::auth::application::ports::outgoing::SessionGate;
    use crate::modules::course::application::ports::incoming::use_cases::CreateCourseUseCase;
    use crate::modules::course::domain::entities::Course;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubSessionGate;

    struct MockCreateCourseUseCase {
        result: Result<Course, CreateCourseError>,
    }

    #[async_trait]
    impl CreateCourseUseCase for MockCreateCourseUseCase {
        async fn execute(&self, _command: CreateCourseCommand) -> Result<Course, CreateCourseError> {
            self.result.clone()
        }
    }

    fn created_course() -> Course {
        Course {
            id: Uuid::new_v4(),
            title: "Full-Stack Web Development".to_string(),
            short_description: "From static pages to deployed apps".to_string(),
            category: "Web".to_string(),
            level: "Beginner".to_string(),
            duration: "12 weeks".to_string(),
            projects: 5,
            modes: vec!["Online".to_string(), "Hybrid".to_string()],
            price_online: Some(499.0),
            price_offline: None,
            icon: "🎓".to_string(),
            gradient: "from-purple-500".to_string(),
            curriculum: vec![CurriculumSection {
                title: "Foundations".to_string(),
                topics: vec!["HTML".to_string(), "CSS".to_string()],
            }],
            tools: vec!["VS Code".to_string()],
            features: vec!["Capstone project".to_string()],
            popular: false,
            active: true,
            sort_order: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn creating_a_course_returns_201_with_the_row() {
        let state = TestAppStateBuilder::default()
            .with_create_course(MockCreateCourseUseCase {
                result: Ok(created_course()),
            })
            .build();
        let gate: Arc<dyn SessionGate> = Arc::new(StubSessionGate::authorized(Uuid::new_v4()));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(gate))
                .service(create_course_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/courses")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(json!({
                "title": "Full-Stack Web Development",
                "shortDescription": "From static pages to deployed apps",
                "category": "Web",
                "level": "Beginner",
                "duration": "12 weeks",
                "projects": 5,
                "modes": ["Online", "Hybrid"],
                "priceOnline": 499.0,
                "icon": "🎓",
                "gradient": "from-purple-500",
                "curriculum": [
                    {"title": "Foundations", "topics": ["HTML", "CSS"]}
                ],
                "order": 3
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);

        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["title"], "Full-Stack Web Development");
        assert_eq!(json["data"]["modes"], json!(["Online", "Hybrid"]));
        assert_eq!(json["data"]["curriculum"][0]["topics"][1], "CSS");
    }

    #[actix_web::test]
    async fn missing_fields_are_all_reported() {
        let state = TestAppStateBuilder::default().build();
        let gate: Arc<dyn SessionGate> = Arc::new(StubSessionGate::authorized(Uuid::new_v4()));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(gate))
                .service(create_course_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/courses")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(json!({
                "title": "Full-Stack Web Development",
                "category": "Web",
                "level": "Beginner",
                "duration": "12 weeks",
                "icon": "🎓",
                "gradient": "from-purple-500"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"], "Validation failed");

        let fields: Vec<&str> = json["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["shortDescription", "projects", "modes"]);
    }

    #[actix_web::test]
    async fn an_unknown_mode_is_rejected() {
        let state = TestAppStateBuilder::default().build();
        let gate: Arc<dyn SessionGate> = Arc::new(StubSessionGate::authorized(Uuid::new_v4()));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(gate))
                .service(create_course_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/courses")
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(json!({
                "title": "Full-Stack Web Development",
                "shortDescription": "From static pages to deployed apps",
                "category": "Web",
                "level": "Beginner",
                "duration": "12 weeks",
                "projects": 5,
                "modes": ["Correspondence"],
                "icon": "🎓",
                "gradient": "from-purple-500"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        let error = &json["details"][0];
        assert_eq!(error["field"], "modes");
        assert_eq!(error["message"], "must be one of: Online, Offline, Hybrid");
    }

    #[actix_web::test]
    async fn creating_without_token_returns_unauthorized() {
        let state = TestAppStateBuilder::default().build();
        let gate: Arc<dyn SessionGate> = Arc::new(StubSessionGate::anonymous());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(gate))
                .service(create_course_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/courses")
            .set_json(json!({"title": "Full-Stack Web Development"}))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
