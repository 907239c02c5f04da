use actix_web::web;
use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentUseCase, UpsertContentUseCase,
};
use crate::modules::content::application::ContentUseCases;
use crate::modules::course::application::ports::incoming::use_cases::{
    CreateCourseUseCase, DeleteCourseUseCase, GetCoursesUseCase, PatchCourseUseCase,
};
use crate::modules::course::application::CourseUseCases;
use crate::modules::message::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, GetMessagesUseCase, SetMessageReadUseCase, SubmitMessageUseCase,
};
use crate::modules::message::application::MessageUseCases;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, PatchProjectUseCase,
};
use crate::modules::project::application::ProjectUseCases;
use crate::modules::service::application::ports::incoming::use_cases::{
    CreateServiceUseCase, DeleteServiceUseCase, GetServicesUseCase, PatchServiceUseCase,
};
use crate::modules::service::application::ServiceUseCases;
use crate::modules::settings::application::ports::incoming::use_cases::{
    GetSettingUseCase, GetSettingsUseCase, UpsertSettingUseCase,
};
use crate::modules::settings::application::SettingsUseCases;
use crate::modules::technology::application::ports::incoming::use_cases::{
    CreateTechnologyUseCase, DeleteTechnologyUseCase, GetTechnologiesUseCase,
    PatchTechnologyUseCase,
};
use crate::modules::technology::application::TechnologyUseCases;
use crate::modules::testimonial::application::ports::incoming::use_cases::{
    CreateTestimonialUseCase, DeleteTestimonialUseCase, GetTestimonialsUseCase,
    PatchTestimonialUseCase,
};
use crate::modules::testimonial::application::TestimonialUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a panicking stub until a
/// test swaps in the one it exercises.
pub struct TestAppStateBuilder {
    services: ServiceUseCases,
    projects: ProjectUseCases,
    testimonials: TestimonialUseCases,
    technologies: TechnologyUseCases,
    courses: CourseUseCases,
    messages: MessageUseCases,
    content: ContentUseCases,
    settings: SettingsUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            services: ServiceUseCases {
                get_list: Arc::new(StubGetServicesUseCase),
                create: Arc::new(StubCreateServiceUseCase),
                patch: Arc::new(StubPatchServiceUseCase),
                delete: Arc::new(StubDeleteServiceUseCase),
            },
            projects: ProjectUseCases {
                get_list: Arc::new(StubGetProjectsUseCase),
                create: Arc::new(StubCreateProjectUseCase),
                patch: Arc::new(StubPatchProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
            },
            testimonials: TestimonialUseCases {
                get_list: Arc::new(StubGetTestimonialsUseCase),
                create: Arc::new(StubCreateTestimonialUseCase),
                patch: Arc::new(StubPatchTestimonialUseCase),
                delete: Arc::new(StubDeleteTestimonialUseCase),
            },
            technologies: TechnologyUseCases {
                get_list: Arc::new(StubGetTechnologiesUseCase),
                create: Arc::new(StubCreateTechnologyUseCase),
                patch: Arc::new(StubPatchTechnologyUseCase),
                delete: Arc::new(StubDeleteTechnologyUseCase),
            },
            courses: CourseUseCases {
                get_list: Arc::new(StubGetCoursesUseCase),
                create: Arc::new(StubCreateCourseUseCase),
                patch: Arc::new(StubPatchCourseUseCase),
                delete: Arc::new(StubDeleteCourseUseCase),
            },
            messages: MessageUseCases {
                get_list: Arc::new(StubGetMessagesUseCase),
                submit: Arc::new(StubSubmitMessageUseCase),
                set_read: Arc::new(StubSetMessageReadUseCase),
                delete: Arc::new(StubDeleteMessageUseCase),
            },
            content: ContentUseCases {
                get_section: Arc::new(StubGetContentUseCase),
                upsert: Arc::new(StubUpsertContentUseCase),
            },
            settings: SettingsUseCases {
                get_all: Arc::new(StubGetSettingsUseCase),
                get_one: Arc::new(StubGetSettingUseCase),
                upsert: Arc::new(StubUpsertSettingUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_services(mut self, uc: impl GetServicesUseCase + Send + Sync + 'static) -> Self {
        self.services.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_service(
        mut self,
        uc: impl CreateServiceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.services.create = Arc::new(uc);
        self
    }

    pub fn with_patch_service(
        mut self,
        uc: impl PatchServiceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.services.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_service(
        mut self,
        uc: impl DeleteServiceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.services.delete = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.projects.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.projects.create = Arc::new(uc);
        self
    }

    pub fn with_patch_project(
        mut self,
        uc: impl PatchProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.projects.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.projects.delete = Arc::new(uc);
        self
    }

    pub fn with_get_testimonials(
        mut self,
        uc: impl GetTestimonialsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonials.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_testimonial(
        mut self,
        uc: impl CreateTestimonialUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonials.create = Arc::new(uc);
        self
    }

    pub fn with_patch_testimonial(
        mut self,
        uc: impl PatchTestimonialUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonials.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_testimonial(
        mut self,
        uc: impl DeleteTestimonialUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonials.delete = Arc::new(uc);
        self
    }

    pub fn with_get_technologies(
        mut self,
        uc: impl GetTechnologiesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.technologies.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_technology(
        mut self,
        uc: impl CreateTechnologyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.technologies.create = Arc::new(uc);
        self
    }

    pub fn with_patch_technology(
        mut self,
        uc: impl PatchTechnologyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.technologies.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_technology(
        mut self,
        uc: impl DeleteTechnologyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.technologies.delete = Arc::new(uc);
        self
    }

    pub fn with_get_courses(mut self, uc: impl GetCoursesUseCase + Send + Sync + 'static) -> Self {
        self.courses.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_course(
        mut self,
        uc: impl CreateCourseUseCase + Send + Sync + 'static,
    ) -> Self {
        self.courses.create = Arc::new(uc);
        self
    }

    pub fn with_patch_course(mut self, uc: impl PatchCourseUseCase + Send + Sync + 'static) -> Self {
        self.courses.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_course(
        mut self,
        uc: impl DeleteCourseUseCase + Send + Sync + 'static,
    ) -> Self {
        self.courses.delete = Arc::new(uc);
        self
    }

    pub fn with_get_messages(mut self, uc: impl GetMessagesUseCase + Send + Sync + 'static) -> Self {
        self.messages.get_list = Arc::new(uc);
        self
    }

    pub fn with_submit_message(
        mut self,
        uc: impl SubmitMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.messages.submit = Arc::new(uc);
        self
    }

    pub fn with_set_message_read(
        mut self,
        uc: impl SetMessageReadUseCase + Send + Sync + 'static,
    ) -> Self {
        self.messages.set_read = Arc::new(uc);
        self
    }

    pub fn with_delete_message(
        mut self,
        uc: impl DeleteMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.messages.delete = Arc::new(uc);
        self
    }

    pub fn with_get_content(mut self, uc: impl GetContentUseCase + Send + Sync + 'static) -> Self {
        self.content.get_section = Arc::new(uc);
        self
    }

    pub fn with_upsert_content(
        mut self,
        uc: impl UpsertContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.upsert = Arc::new(uc);
        self
    }

    pub fn with_get_settings(mut self, uc: impl GetSettingsUseCase + Send + Sync + 'static) -> Self {
        self.settings.get_all = Arc::new(uc);
        self
    }

    pub fn with_get_setting(mut self, uc: impl GetSettingUseCase + Send + Sync + 'static) -> Self {
        self.settings.get_one = Arc::new(uc);
        self
    }

    pub fn with_upsert_setting(
        mut self,
        uc: impl UpsertSettingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.settings.upsert = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            services: self.services,
            projects: self.projects,
            testimonials: self.testimonials,
            technologies: self.technologies,
            courses: self.courses,
            messages: self.messages,
            content: self.content,
            settings: self.settings,
        })
    }
}
