use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{SessionGate, SessionGateError};
use crate::auth::domain::entities::Principal;
use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentCommand, GetContentError, GetContentUseCase, UpsertContentCommand,
    UpsertContentError, UpsertContentUseCase,
};
use crate::modules::content::domain::entities::SiteContent;
use crate::modules::course::application::ports::incoming::use_cases::{
    CreateCourseCommand, CreateCourseError, CreateCourseUseCase, DeleteCourseError,
    DeleteCourseUseCase, GetCoursesError, GetCoursesUseCase, PatchCourseCommand, PatchCourseError,
    PatchCourseUseCase,
};
use crate::modules::course::domain::entities::Course;
use crate::modules::message::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase, GetMessagesError, GetMessagesUseCase,
    SetMessageReadCommand, SetMessageReadError, SetMessageReadUseCase, SubmitMessageCommand,
    SubmitMessageError, SubmitMessageUseCase,
};
use crate::modules::message::domain::entities::ContactMessage;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase, DeleteProjectError,
    DeleteProjectUseCase, GetProjectsError, GetProjectsUseCase, PatchProjectCommand,
    PatchProjectError, PatchProjectUseCase,
};
use crate::modules::project::domain::entities::Project;
use crate::modules::service::application::ports::incoming::use_cases::{
    CreateServiceCommand, CreateServiceError, CreateServiceUseCase, DeleteServiceError,
    DeleteServiceUseCase, GetServicesError, GetServicesUseCase, PatchServiceCommand,
    PatchServiceError, PatchServiceUseCase,
};
use crate::modules::service::domain::entities::Service;
use crate::modules::settings::application::ports::incoming::use_cases::{
    GetSettingCommand, GetSettingError, GetSettingUseCase, GetSettingsError, GetSettingsUseCase,
    UpsertSettingCommand, UpsertSettingError, UpsertSettingUseCase,
};
use crate::modules::settings::domain::entities::SiteSetting;
use crate::modules::technology::application::ports::incoming::use_cases::{
    CreateTechnologyCommand, CreateTechnologyError, CreateTechnologyUseCase,
    DeleteTechnologyError, DeleteTechnologyUseCase, GetTechnologiesError, GetTechnologiesUseCase,
    PatchTechnologyCommand, PatchTechnologyError, PatchTechnologyUseCase,
};
use crate::modules::technology::domain::entities::Technology;
use crate::modules::testimonial::application::ports::incoming::use_cases::{
    CreateTestimonialCommand, CreateTestimonialError, CreateTestimonialUseCase,
    DeleteTestimonialError, DeleteTestimonialUseCase, GetTestimonialsError, GetTestimonialsUseCase,
    PatchTestimonialCommand, PatchTestimonialError, PatchTestimonialUseCase,
};
use crate::modules::testimonial::domain::entities::Testimonial;

/// Session gate with a canned answer, standing in for the sessions table.
pub struct StubSessionGate {
    outcome: Result<Option<Uuid>, String>,
}

impl StubSessionGate {
    /// Every presented token resolves to a live session for `user_id`.
    pub fn authorized(user_id: Uuid) -> Self {
        Self {
            outcome: Ok(Some(user_id)),
        }
    }

    /// No token resolves to a session.
    pub fn anonymous() -> Self {
        Self { outcome: Ok(None) }
    }

    /// The lookup itself fails, as when the session store is unreachable.
    pub fn failing() -> Self {
        Self {
            outcome: Err("session store unavailable".to_string()),
        }
    }
}

#[async_trait]
impl SessionGate for StubSessionGate {
    async fn authorize(&self, _token: &str) -> Result<Option<Principal>, SessionGateError> {
        match &self.outcome {
            Ok(Some(user_id)) => Ok(Some(Principal { user_id: *user_id })),
            Ok(None) => Ok(None),
            Err(e) => Err(SessionGateError::LookupFailed(e.clone())),
        }
    }
}

// Default use-case stubs for TestAppStateBuilder. A route test swaps in a
// mock for the one use case it exercises; every other slot panics if touched.

#[derive(Default, Clone)]
pub struct StubGetServicesUseCase;

#[async_trait]
impl GetServicesUseCase for StubGetServicesUseCase {
    async fn execute(&self, _only_active: bool) -> Result<Vec<Service>, GetServicesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateServiceUseCase;

#[async_trait]
impl CreateServiceUseCase for StubCreateServiceUseCase {
    async fn execute(&self, _command: CreateServiceCommand) -> Result<Service, CreateServiceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchServiceUseCase;

#[async_trait]
impl PatchServiceUseCase for StubPatchServiceUseCase {
    async fn execute(
        &self,
        _service_id: Uuid,
        _command: PatchServiceCommand,
    ) -> Result<Service, PatchServiceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteServiceUseCase;

#[async_trait]
impl DeleteServiceUseCase for StubDeleteServiceUseCase {
    async fn execute(&self, _service_id: Uuid) -> Result<(), DeleteServiceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self, _only_active: bool) -> Result<Vec<Project>, GetProjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _command: CreateProjectCommand) -> Result<Project, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchProjectUseCase;

#[async_trait]
impl PatchProjectUseCase for StubPatchProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _command: PatchProjectCommand,
    ) -> Result<Project, PatchProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<(), DeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetTestimonialsUseCase;

#[async_trait]
impl GetTestimonialsUseCase for StubGetTestimonialsUseCase {
    async fn execute(&self, _only_active: bool) -> Result<Vec<Testimonial>, GetTestimonialsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateTestimonialUseCase;

#[async_trait]
impl CreateTestimonialUseCase for StubCreateTestimonialUseCase {
    async fn execute(
        &self,
        _command: CreateTestimonialCommand,
    ) -> Result<Testimonial, CreateTestimonialError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchTestimonialUseCase;

#[async_trait]
impl PatchTestimonialUseCase for StubPatchTestimonialUseCase {
    async fn execute(
        &self,
        _testimonial_id: Uuid,
        _command: PatchTestimonialCommand,
    ) -> Result<Testimonial, PatchTestimonialError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteTestimonialUseCase;

#[async_trait]
impl DeleteTestimonialUseCase for StubDeleteTestimonialUseCase {
    async fn execute(&self, _testimonial_id: Uuid) -> Result<(), DeleteTestimonialError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetTechnologiesUseCase;

#[async_trait]
impl GetTechnologiesUseCase for StubGetTechnologiesUseCase {
    async fn execute(&self, _only_active: bool) -> Result<Vec<Technology>, GetTechnologiesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateTechnologyUseCase;

#[async_trait]
impl CreateTechnologyUseCase for StubCreateTechnologyUseCase {
    async fn execute(
        &self,
        _command: CreateTechnologyCommand,
    ) -> Result<Technology, CreateTechnologyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchTechnologyUseCase;

#[async_trait]
impl PatchTechnologyUseCase for StubPatchTechnologyUseCase {
    async fn execute(
        &self,
        _technology_id: Uuid,
        _command: PatchTechnologyCommand,
    ) -> Result<Technology, PatchTechnologyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteTechnologyUseCase;

#[async_trait]
impl DeleteTechnologyUseCase for StubDeleteTechnologyUseCase {
    async fn execute(&self, _technology_id: Uuid) -> Result<(), DeleteTechnologyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCoursesUseCase;

#[async_trait]
impl GetCoursesUseCase for StubGetCoursesUseCase {
    async fn execute(&self, _only_active: bool) -> Result<Vec<Course>, GetCoursesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCourseUseCase;

#[async_trait]
impl CreateCourseUseCase for StubCreateCourseUseCase {
    async fn execute(&self, _command: CreateCourseCommand) -> Result<Course, CreateCourseError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchCourseUseCase;

#[async_trait]
impl PatchCourseUseCase for StubPatchCourseUseCase {
    async fn execute(
        &self,
        _course_id: Uuid,
        _command: PatchCourseCommand,
    ) -> Result<Course, PatchCourseError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCourseUseCase;

#[async_trait]
impl DeleteCourseUseCase for StubDeleteCourseUseCase {
    async fn execute(&self, _course_id: Uuid) -> Result<(), DeleteCourseError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetMessagesUseCase;

#[async_trait]
impl GetMessagesUseCase for StubGetMessagesUseCase {
    async fn execute(&self) -> Result<Vec<ContactMessage>, GetMessagesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitMessageUseCase;

#[async_trait]
impl SubmitMessageUseCase for StubSubmitMessageUseCase {
    async fn execute(
        &self,
        _command: SubmitMessageCommand,
    ) -> Result<ContactMessage, SubmitMessageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSetMessageReadUseCase;

#[async_trait]
impl SetMessageReadUseCase for StubSetMessageReadUseCase {
    async fn execute(
        &self,
        _message_id: Uuid,
        _command: SetMessageReadCommand,
    ) -> Result<ContactMessage, SetMessageReadError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteMessageUseCase;

#[async_trait]
impl DeleteMessageUseCase for StubDeleteMessageUseCase {
    async fn execute(&self, _message_id: Uuid) -> Result<(), DeleteMessageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetContentUseCase;

#[async_trait]
impl GetContentUseCase for StubGetContentUseCase {
    async fn execute(&self, _command: GetContentCommand) -> Result<SiteContent, GetContentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpsertContentUseCase;

#[async_trait]
impl UpsertContentUseCase for StubUpsertContentUseCase {
    async fn execute(
        &self,
        _command: UpsertContentCommand,
    ) -> Result<SiteContent, UpsertContentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSettingsUseCase;

#[async_trait]
impl GetSettingsUseCase for StubGetSettingsUseCase {
    async fn execute(&self) -> Result<BTreeMap<String, Value>, GetSettingsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSettingUseCase;

#[async_trait]
impl GetSettingUseCase for StubGetSettingUseCase {
    async fn execute(&self, _command: GetSettingCommand) -> Result<SiteSetting, GetSettingError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpsertSettingUseCase;

#[async_trait]
impl UpsertSettingUseCase for StubUpsertSettingUseCase {
    async fn execute(
        &self,
        _command: UpsertSettingCommand,
    ) -> Result<SiteSetting, UpsertSettingError> {
        unimplemented!("Not used in this test")
    }
}
