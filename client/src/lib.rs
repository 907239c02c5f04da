//! Typed client for the agency CMS admin API.
//!
//! One [`ResourceStore`] per collection keeps an in-memory mirror of
//! server state: every mutation is awaited, then the mirror is patched
//! from the returned record (append on create, positional replace on
//! update, removal on delete) without a refetch. [`ContentStore`] and
//! [`SettingsStore`] do the same for the singleton-keyed resources.
//!
//! The wire sits behind transport traits so tests (and embedders) can
//! swap the reqwest-backed [`HttpApi`] for an in-memory fake;
//! notifications flow through the [`Notifier`] trait, which the admin
//! UI maps to its toast system.

pub mod content;
pub mod error;
pub mod notify;
pub mod resources;
pub mod store;
pub mod transport;
pub mod types;

pub use content::{ContentStore, SettingsStore};
pub use error::{ClientError, FieldError};
pub use notify::{Notifier, TracingNotifier};
pub use resources::{
    AdminResource, Courses, CreatableResource, Messages, Projects, Services, Technologies,
    Testimonials,
};
pub use store::ResourceStore;
pub use transport::{
    ContentTransport, CreateTransport, HttpApi, ResourceTransport, SettingsTransport,
};
pub use types::*;

/// Store aliases over the production transport.
pub type ServiceStore = ResourceStore<Services, HttpApi>;
pub type ProjectStore = ResourceStore<Projects, HttpApi>;
pub type TestimonialStore = ResourceStore<Testimonials, HttpApi>;
pub type TechnologyStore = ResourceStore<Technologies, HttpApi>;
pub type CourseStore = ResourceStore<Courses, HttpApi>;
pub type MessageStore = ResourceStore<Messages, HttpApi>;
