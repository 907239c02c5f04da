//! Mirrors for the singleton-keyed resources: per-section site content
//! and the settings groups.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::ClientError;
use crate::notify::Notifier;
use crate::transport::{ContentTransport, SettingsTransport};

/// Mirror of the per-section content documents, loaded one section at
/// a time (the admin edits one page section per screen).
pub struct ContentStore<T: ContentTransport> {
    api: T,
    notifier: Arc<dyn Notifier>,
    sections: BTreeMap<String, Value>,
    loading: bool,
    error: Option<String>,
}

impl<T: ContentTransport> ContentStore<T> {
    pub fn new(api: T, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            sections: BTreeMap::new(),
            loading: false,
            error: None,
        }
    }

    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections.get(name)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A section that has never been written reads as absent. That is
    /// the blank-form case, not an error worth a toast.
    pub async fn load(&mut self, section: &str) {
        self.loading = true;
        match self.api.get_section(section).await {
            Ok(record) => {
                self.sections.insert(record.section, record.content);
                self.error = None;
            }
            Err(ClientError::NotFound) => {
                self.sections.remove(section);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.notifier
                    .error(&format!("Failed to load {section} content: {err}"));
            }
        }
        self.loading = false;
    }

    pub async fn save(&mut self, section: &str, content: Value) -> Result<(), ClientError> {
        match self.api.put_section(section, &content).await {
            Ok(record) => {
                self.sections.insert(record.section, record.content);
                self.notifier.success(&format!("Saved {section} content"));
                Ok(())
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to save {section} content: {err}"));
                Err(err)
            }
        }
    }
}

/// Mirror of every settings group, loaded in one call.
pub struct SettingsStore<T: SettingsTransport> {
    api: T,
    notifier: Arc<dyn Notifier>,
    settings: BTreeMap<String, Value>,
    loading: bool,
    error: Option<String>,
}

impl<T: SettingsTransport> SettingsStore<T> {
    pub fn new(api: T, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            settings: BTreeMap::new(),
            loading: false,
            error: None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.get_all().await {
            Ok(settings) => {
                self.settings = settings;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.notifier
                    .error(&format!("Failed to load settings: {err}"));
            }
        }
        self.loading = false;
    }

    pub async fn save(&mut self, key: &str, value: Value) -> Result<(), ClientError> {
        match self.api.put_setting(key, &value).await {
            Ok(record) => {
                self.settings.insert(record.key, record.value);
                self.notifier.success(&format!("Saved {key} settings"));
                Ok(())
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to save {key} settings: {err}"));
                Err(err)
            }
        }
    }
}
