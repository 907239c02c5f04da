//! Marker types tying each admin collection to its wire types and its
//! path segment under `/api/admin/`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::types::{
    ContactMessage, Course, CoursePatch, MessagePatch, NewCourse, NewProject, NewService,
    NewTechnology, NewTestimonial, Project, ProjectPatch, Service, ServicePatch, Technology,
    TechnologyPatch, Testimonial, TestimonialPatch,
};

/// A resource kind served under `/api/admin/{PATH}`.
pub trait AdminResource: Send + Sync + 'static {
    type Record: DeserializeOwned + Clone + Send + Sync + 'static;
    type Patch: Serialize + Send + Sync;

    /// Path segment under `/api/admin/`.
    const PATH: &'static str;
    /// Singular display name used in notifications.
    const LABEL: &'static str;

    fn id(record: &Self::Record) -> Uuid;
}

/// Resource kinds the admin panel may create. Contact messages are not
/// one of them: they only enter through the public contact form.
pub trait CreatableResource: AdminResource {
    type New: Serialize + Send + Sync;
}

pub struct Services;

impl AdminResource for Services {
    type Record = Service;
    type Patch = ServicePatch;

    const PATH: &'static str = "services";
    const LABEL: &'static str = "Service";

    fn id(record: &Service) -> Uuid {
        record.id
    }
}

impl CreatableResource for Services {
    type New = NewService;
}

pub struct Projects;

impl AdminResource for Projects {
    type Record = Project;
    type Patch = ProjectPatch;

    const PATH: &'static str = "projects";
    const LABEL: &'static str = "Project";

    fn id(record: &Project) -> Uuid {
        record.id
    }
}

impl CreatableResource for Projects {
    type New = NewProject;
}

pub struct Testimonials;

impl AdminResource for Testimonials {
    type Record = Testimonial;
    type Patch = TestimonialPatch;

    const PATH: &'static str = "testimonials";
    const LABEL: &'static str = "Testimonial";

    fn id(record: &Testimonial) -> Uuid {
        record.id
    }
}

impl CreatableResource for Testimonials {
    type New = NewTestimonial;
}

pub struct Technologies;

impl AdminResource for Technologies {
    type Record = Technology;
    type Patch = TechnologyPatch;

    const PATH: &'static str = "technologies";
    const LABEL: &'static str = "Technology";

    fn id(record: &Technology) -> Uuid {
        record.id
    }
}

impl CreatableResource for Technologies {
    type New = NewTechnology;
}

pub struct Courses;

impl AdminResource for Courses {
    type Record = Course;
    type Patch = CoursePatch;

    const PATH: &'static str = "courses";
    const LABEL: &'static str = "Course";

    fn id(record: &Course) -> Uuid {
        record.id
    }
}

impl CreatableResource for Courses {
    type New = NewCourse;
}

pub struct Messages;

impl AdminResource for Messages {
    type Record = ContactMessage;
    type Patch = MessagePatch;

    const PATH: &'static str = "messages";
    const LABEL: &'static str = "Message";

    fn id(record: &ContactMessage) -> Uuid {
        record.id
    }
}
