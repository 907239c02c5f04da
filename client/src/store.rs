//! In-memory mirrors of the admin collections.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::ClientError;
use crate::notify::Notifier;
use crate::resources::{AdminResource, CreatableResource};
use crate::transport::{CreateTransport, ResourceTransport};

/// Mirror of one admin collection.
///
/// Mutations are awaited before the mirror changes, then the mirror is
/// patched from the single returned record and never refetched. Two
/// stores over the same collection can therefore diverge until one of
/// them calls [`refresh`](Self::refresh).
pub struct ResourceStore<R: AdminResource, T> {
    api: T,
    notifier: Arc<dyn Notifier>,
    records: Vec<R::Record>,
    loading: bool,
    error: Option<String>,
}

impl<R, T> ResourceStore<R, T>
where
    R: AdminResource,
    T: ResourceTransport<R>,
{
    pub fn new(api: T, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            records: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn records(&self) -> &[R::Record] {
        &self.records
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch-on-mount. A failure keeps whatever the mirror already held,
    /// which is the empty list on first use.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.list().await {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.notifier
                    .error(&format!("Failed to load {}: {err}", R::PATH));
            }
        }
        self.loading = false;
    }

    /// Full reload, for callers that just finished a batch of edits.
    pub async fn refresh(&mut self) {
        self.load().await;
    }

    pub async fn update(&mut self, id: Uuid, patch: &R::Patch) -> Result<R::Record, ClientError> {
        match self.api.update(id, patch).await {
            Ok(updated) => {
                // Positional replace keeps the list order the user sees.
                if let Some(slot) = self.records.iter_mut().find(|r| R::id(r) == id) {
                    *slot = updated.clone();
                }
                self.notifier.success(&format!("{} updated", R::LABEL));
                Ok(updated)
            }
            Err(err) => {
                self.notifier.error(&format!(
                    "Failed to update {}: {err}",
                    R::LABEL.to_lowercase()
                ));
                Err(err)
            }
        }
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<(), ClientError> {
        match self.api.delete(id).await {
            Ok(()) => {
                self.records.retain(|r| R::id(r) != id);
                self.notifier.success(&format!("{} deleted", R::LABEL));
                Ok(())
            }
            Err(err) => {
                self.notifier.error(&format!(
                    "Failed to delete {}: {err}",
                    R::LABEL.to_lowercase()
                ));
                Err(err)
            }
        }
    }
}

impl<R, T> ResourceStore<R, T>
where
    R: CreatableResource,
    T: CreateTransport<R>,
{
    /// The error is returned, not swallowed, so a form submit handler
    /// can keep its edit state open on failure.
    pub async fn create(&mut self, payload: &R::New) -> Result<R::Record, ClientError> {
        match self.api.create(payload).await {
            Ok(created) => {
                self.records.push(created.clone());
                self.notifier.success(&format!("{} created", R::LABEL));
                Ok(created)
            }
            Err(err) => {
                self.notifier.error(&format!(
                    "Failed to create {}: {err}",
                    R::LABEL.to_lowercase()
                ));
                Err(err)
            }
        }
    }
}
