use crate::api::schemas::{ErrorResponse, FieldErrorSchema, ValidationErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Messages
use crate::modules::message::adapter::incoming::web::routes::SubmitMessageRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Agency CMS API",
        version = "1.0.0",
        description = "API documentation for the agency site admin panel and its public content endpoints",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Public endpoints
        crate::modules::message::adapter::incoming::web::routes::submit_message::submit_message_handler,
        crate::modules::content::adapter::incoming::web::routes::get_public_content::get_public_content_handler,

        // Service endpoints
        // get_services_handler,
        // create_service_handler,
        // update_service_handler,
        // delete_service_handler,
        // get_public_services_handler,

        // Project endpoints
        // get_projects_handler,
        // create_project_handler,
        // update_project_handler,
        // delete_project_handler,
        // get_public_projects_handler,

        // Testimonial endpoints
        // get_testimonials_handler,
        // create_testimonial_handler,
        // update_testimonial_handler,
        // delete_testimonial_handler,
        // get_public_testimonials_handler,

        // Technology endpoints
        // get_technologies_handler,
        // create_technology_handler,
        // update_technology_handler,
        // delete_technology_handler,
        // get_public_technologies_handler,

        // Course endpoints
        // get_courses_handler,
        // create_course_handler,
        // update_course_handler,
        // delete_course_handler,
        // get_public_courses_handler,

        // Message endpoints
        // get_messages_handler,
        // update_message_handler,
        // delete_message_handler,

        // Content endpoints
        // get_content_handler,
        // update_content_handler,

        // Settings endpoints
        // get_settings_handler,
        // update_settings_handler,
        // get_public_setting_handler,
    ),
    components(
        schemas(
            // Contact form DTO
            SubmitMessageRequest,

            // Envelope shapes
            ErrorResponse,
            ValidationErrorResponse,
            FieldErrorSchema
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "public", description = "Unauthenticated endpoints consumed by the site frontend"),
        (name = "services", description = "Service catalog management"),
        (name = "projects", description = "Portfolio project management"),
        (name = "testimonials", description = "Testimonial management"),
        (name = "technologies", description = "Technology stack management"),
        (name = "courses", description = "Course catalog management"),
        (name = "messages", description = "Contact inbox"),
        (name = "content", description = "Site content sections"),
        (name = "settings", description = "Site settings groups"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Admin session token issued by the auth provider"))
                        .build(),
                ),
            )
        }
    }
}
