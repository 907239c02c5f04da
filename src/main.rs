pub mod api;
pub mod modules;
pub use modules::auth;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::session_gate_postgres::SessionGatePostgres;
use crate::auth::application::ports::outgoing::SessionGate;

use crate::modules::content::adapter::outgoing::content_repository_postgres::ContentRepositoryPostgres;
use crate::modules::content::application::service::{GetContentService, UpsertContentService};
use crate::modules::content::application::ContentUseCases;
use crate::modules::course::adapter::outgoing::course_repository_postgres::CourseRepositoryPostgres;
use crate::modules::course::application::service::{
    CreateCourseService, DeleteCourseService, GetCoursesService, PatchCourseService,
};
use crate::modules::course::application::CourseUseCases;
use crate::modules::message::adapter::outgoing::message_repository_postgres::MessageRepositoryPostgres;
use crate::modules::message::application::service::{
    DeleteMessageService, GetMessagesService, SetMessageReadService, SubmitMessageService,
};
use crate::modules::message::application::MessageUseCases;
use crate::modules::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, PatchProjectService,
};
use crate::modules::project::application::ProjectUseCases;
use crate::modules::service::adapter::outgoing::service_repository_postgres::ServiceRepositoryPostgres;
use crate::modules::service::application::service::{
    CreateServiceService, DeleteServiceService, GetServicesService, PatchServiceService,
};
use crate::modules::service::application::ServiceUseCases;
use crate::modules::settings::adapter::outgoing::settings_repository_postgres::SettingsRepositoryPostgres;
use crate::modules::settings::application::service::{
    GetSettingService, GetSettingsService, UpsertSettingService,
};
use crate::modules::settings::application::SettingsUseCases;
use crate::modules::technology::adapter::outgoing::technology_repository_postgres::TechnologyRepositoryPostgres;
use crate::modules::technology::application::service::{
    CreateTechnologyService, DeleteTechnologyService, GetTechnologiesService,
    PatchTechnologyService,
};
use crate::modules::technology::application::TechnologyUseCases;
use crate::modules::testimonial::adapter::outgoing::testimonial_repository_postgres::TestimonialRepositoryPostgres;
use crate::modules::testimonial::application::service::{
    CreateTestimonialService, DeleteTestimonialService, GetTestimonialsService,
    PatchTestimonialService,
};
use crate::modules::testimonial::application::TestimonialUseCases;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub services: ServiceUseCases,
    pub projects: ProjectUseCases,
    pub testimonials: TestimonialUseCases,
    pub technologies: TechnologyUseCases,
    pub courses: CourseUseCases,
    pub messages: MessageUseCases,
    pub content: ContentUseCases,
    pub settings: SettingsUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Repositories, one per aggregate, all sharing the pool
    let service_repo = ServiceRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let testimonial_repo = TestimonialRepositoryPostgres::new(Arc::clone(&db_arc));
    let technology_repo = TechnologyRepositoryPostgres::new(Arc::clone(&db_arc));
    let course_repo = CourseRepositoryPostgres::new(Arc::clone(&db_arc));
    let message_repo = MessageRepositoryPostgres::new(Arc::clone(&db_arc));
    let content_repo = ContentRepositoryPostgres::new(Arc::clone(&db_arc));
    let settings_repo = SettingsRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        services: ServiceUseCases {
            get_list: Arc::new(GetServicesService::new(service_repo.clone())),
            create: Arc::new(CreateServiceService::new(service_repo.clone())),
            patch: Arc::new(PatchServiceService::new(service_repo.clone())),
            delete: Arc::new(DeleteServiceService::new(service_repo)),
        },
        projects: ProjectUseCases {
            get_list: Arc::new(GetProjectsService::new(project_repo.clone())),
            create: Arc::new(CreateProjectService::new(project_repo.clone())),
            patch: Arc::new(PatchProjectService::new(project_repo.clone())),
            delete: Arc::new(DeleteProjectService::new(project_repo)),
        },
        testimonials: TestimonialUseCases {
            get_list: Arc::new(GetTestimonialsService::new(testimonial_repo.clone())),
            create: Arc::new(CreateTestimonialService::new(testimonial_repo.clone())),
            patch: Arc::new(PatchTestimonialService::new(testimonial_repo.clone())),
            delete: Arc::new(DeleteTestimonialService::new(testimonial_repo)),
        },
        technologies: TechnologyUseCases {
            get_list: Arc::new(GetTechnologiesService::new(technology_repo.clone())),
            create: Arc::new(CreateTechnologyService::new(technology_repo.clone())),
            patch: Arc::new(PatchTechnologyService::new(technology_repo.clone())),
            delete: Arc::new(DeleteTechnologyService::new(technology_repo)),
        },
        courses: CourseUseCases {
            get_list: Arc::new(GetCoursesService::new(course_repo.clone())),
            create: Arc::new(CreateCourseService::new(course_repo.clone())),
            patch: Arc::new(PatchCourseService::new(course_repo.clone())),
            delete: Arc::new(DeleteCourseService::new(course_repo)),
        },
        messages: MessageUseCases {
            get_list: Arc::new(GetMessagesService::new(message_repo.clone())),
            submit: Arc::new(SubmitMessageService::new(message_repo.clone())),
            set_read: Arc::new(SetMessageReadService::new(message_repo.clone())),
            delete: Arc::new(DeleteMessageService::new(message_repo)),
        },
        content: ContentUseCases {
            get_section: Arc::new(GetContentService::new(content_repo.clone())),
            upsert: Arc::new(UpsertContentService::new(content_repo)),
        },
        settings: SettingsUseCases {
            get_all: Arc::new(GetSettingsService::new(settings_repo.clone())),
            get_one: Arc::new(GetSettingService::new(settings_repo.clone())),
            upsert: Arc::new(UpsertSettingService::new(settings_repo)),
        },
    };

    // Sessions are written by the auth provider; this gate only reads them.
    let session_gate: Arc<dyn SessionGate> =
        Arc::new(SessionGatePostgres::new(Arc::clone(&db_arc)));

    // Clone db_arc for use in the HttpServer closure (readiness probe)
    let db_for_server = Arc::clone(&db_arc);

    info!("Server running on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&session_gate)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Services
    cfg.service(crate::modules::service::adapter::incoming::web::routes::get_services_handler);
    cfg.service(crate::modules::service::adapter::incoming::web::routes::create_service_handler);
    cfg.service(crate::modules::service::adapter::incoming::web::routes::update_service_handler);
    cfg.service(crate::modules::service::adapter::incoming::web::routes::delete_service_handler);
    cfg.service(
        crate::modules::service::adapter::incoming::web::routes::get_public_services_handler,
    );
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(
        crate::modules::project::adapter::incoming::web::routes::get_public_projects_handler,
    );
    // Testimonials
    cfg.service(
        crate::modules::testimonial::adapter::incoming::web::routes::get_testimonials_handler,
    );
    cfg.service(
        crate::modules::testimonial::adapter::incoming::web::routes::create_testimonial_handler,
    );
    cfg.service(
        crate::modules::testimonial::adapter::incoming::web::routes::update_testimonial_handler,
    );
    cfg.service(
        crate::modules::testimonial::adapter::incoming::web::routes::delete_testimonial_handler,
    );
    cfg.service(
        crate::modules::testimonial::adapter::incoming::web::routes::get_public_testimonials_handler,
    );
    // Technologies
    cfg.service(
        crate::modules::technology::adapter::incoming::web::routes::get_technologies_handler,
    );
    cfg.service(
        crate::modules::technology::adapter::incoming::web::routes::create_technology_handler,
    );
    cfg.service(
        crate::modules::technology::adapter::incoming::web::routes::update_technology_handler,
    );
    cfg.service(
        crate::modules::technology::adapter::incoming::web::routes::delete_technology_handler,
    );
    cfg.service(
        crate::modules::technology::adapter::incoming::web::routes::get_public_technologies_handler,
    );
    // Courses
    cfg.service(crate::modules::course::adapter::incoming::web::routes::get_courses_handler);
    cfg.service(crate::modules::course::adapter::incoming::web::routes::create_course_handler);
    cfg.service(crate::modules::course::adapter::incoming::web::routes::update_course_handler);
    cfg.service(crate::modules::course::adapter::incoming::web::routes::delete_course_handler);
    cfg.service(crate::modules::course::adapter::incoming::web::routes::get_public_courses_handler);
    // Messages
    cfg.service(crate::modules::message::adapter::incoming::web::routes::submit_message_handler);
    cfg.service(crate::modules::message::adapter::incoming::web::routes::get_messages_handler);
    cfg.service(crate::modules::message::adapter::incoming::web::routes::update_message_handler);
    cfg.service(crate::modules::message::adapter::incoming::web::routes::delete_message_handler);
    // Content
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_content_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::update_content_handler);
    cfg.service(
        crate::modules::content::adapter::incoming::web::routes::get_public_content_handler,
    );
    // Settings
    cfg.service(crate::modules::settings::adapter::incoming::web::routes::get_settings_handler);
    cfg.service(crate::modules::settings::adapter::incoming::web::routes::update_settings_handler);
    cfg.service(
        crate::modules::settings::adapter::incoming::web::routes::get_public_setting_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
