// src/shared/validation.rs
//
// Command constructors report every violated field at once, so these
// helpers append to a shared collector instead of failing fast.
use std::sync::OnceLock;

use email_address::EmailAddress;
use regex::Regex;

use crate::shared::patch::PatchField;

pub use crate::shared::api::FieldError;

#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Ok when nothing was recorded, otherwise the full list.
    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

fn url_pattern() -> &'static Regex {
    static URL: OnceLock<Regex> = OnceLock::new();
    URL.get_or_init(|| Regex::new(r"^https?://\S+$").expect("valid url pattern"))
}

fn hex_color_pattern() -> &'static Regex {
    static COLOR: OnceLock<Regex> = OnceLock::new();
    COLOR.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid color pattern"))
}

/// Required string field: must be present and non-blank after trimming.
/// Returns the trimmed value; on violation the placeholder is dropped by
/// the caller via `finish`.
pub fn required_text(errors: &mut FieldErrors, field: &str, value: Option<String>) -> String {
    match value {
        None => {
            errors.push(field, "is required");
            String::new()
        }
        Some(v) => {
            let trimmed = v.trim().to_string();
            if trimmed.is_empty() {
                errors.push(field, "must not be empty");
            }
            trimmed
        }
    }
}

/// Required string with a minimum length, counted in characters after
/// trimming.
pub fn required_text_min(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    min: usize,
) -> String {
    match value {
        None => {
            errors.push(field, "is required");
            String::new()
        }
        Some(v) => {
            let trimmed = v.trim().to_string();
            if trimmed.chars().count() < min {
                errors.push(field, format!("must be at least {min} characters"));
            }
            trimmed
        }
    }
}

/// Patch-style string field: validated only when present.
pub fn optional_text(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    value.map(|v| {
        let trimmed = v.trim().to_string();
        if trimmed.is_empty() {
            errors.push(field, "must not be empty");
        }
        trimmed
    })
}

pub fn require_url(errors: &mut FieldErrors, field: &str, value: &str) {
    if !url_pattern().is_match(value) {
        errors.push(field, "must be a valid http(s) URL");
    }
}

pub fn require_email(errors: &mut FieldErrors, field: &str, value: &str) {
    if !EmailAddress::is_valid(value) {
        errors.push(field, "must be a valid email address");
    }
}

/// Nullable URL on create: absent or blank means "no link", anything
/// else must be a well-formed http(s) URL.
pub fn optional_url(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        None => None,
        Some(v) => {
            let trimmed = v.trim().to_string();
            if trimmed.is_empty() {
                return None;
            }
            require_url(errors, field, &trimmed);
            Some(trimmed)
        }
    }
}

pub fn require_hex_color(errors: &mut FieldErrors, field: &str, value: &str) {
    if !hex_color_pattern().is_match(value) {
        errors.push(field, "must be a hex color like #1a2b3c");
    }
}

pub fn require_range(errors: &mut FieldErrors, field: &str, value: i32, min: i32, max: i32) {
    if value < min || value > max {
        errors.push(field, format!("must be between {min} and {max}"));
    }
}

pub fn require_non_negative(errors: &mut FieldErrors, field: &str, value: f64) {
    if value < 0.0 {
        errors.push(field, "must not be negative");
    }
}

pub fn require_one_of(errors: &mut FieldErrors, field: &str, value: &str, allowed: &[&str]) {
    if !allowed.contains(&value) {
        errors.push(field, format!("must be one of: {}", allowed.join(", ")));
    }
}

pub fn require_non_empty<T>(errors: &mut FieldErrors, field: &str, items: &[T]) {
    if items.is_empty() {
        errors.push(field, "must contain at least one entry");
    }
}

/// Patch field backing a non-nullable text column: `null` is a violation,
/// a provided value is trimmed and must not be blank.
pub fn patch_text(
    errors: &mut FieldErrors,
    field: &str,
    value: PatchField<String>,
) -> PatchField<String> {
    match value {
        PatchField::Unset => PatchField::Unset,
        PatchField::Null => {
            errors.push(field, "must not be null");
            PatchField::Unset
        }
        PatchField::Value(v) => {
            let trimmed = v.trim().to_string();
            if trimmed.is_empty() {
                errors.push(field, "must not be empty");
            }
            PatchField::Value(trimmed)
        }
    }
}

/// Patch field backing a nullable URL column: `null` clears the link
/// (as does a blank string), a provided value must be well-formed.
pub fn patch_url_nullable(
    errors: &mut FieldErrors,
    field: &str,
    value: PatchField<String>,
) -> PatchField<String> {
    match value {
        PatchField::Unset => PatchField::Unset,
        PatchField::Null => PatchField::Null,
        PatchField::Value(v) => {
            let trimmed = v.trim().to_string();
            if trimmed.is_empty() {
                return PatchField::Null;
            }
            require_url(errors, field, &trimmed);
            PatchField::Value(trimmed)
        }
    }
}

/// Patch field backing a non-nullable column of any type: only rejects
/// explicit `null`.
pub fn reject_null<T>(
    errors: &mut FieldErrors,
    field: &str,
    value: PatchField<T>,
) -> PatchField<T> {
    if value.is_null() {
        errors.push(field, "must not be null");
        PatchField::Unset
    } else {
        value
    }
}
