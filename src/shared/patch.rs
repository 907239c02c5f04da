// src/shared/patch.rs
//
// Explicit partial-update semantics shared by every resource:
// - Unset: field not provided => keep the stored value
// - Null: explicitly null => clear the column (nullable fields only)
// - Value(v): replace with v
//
// Serde behavior with `#[serde(default)]` on the field:
// - omitted field => Unset
// - null => Null
// - value => Value(value)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        link: PatchField<String>,
        #[serde(default)]
        order: PatchField<i32>,
    }

    #[test]
    fn omitted_fields_deserialize_to_unset() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert!(body.link.is_unset());
        assert!(body.order.is_unset());
    }

    #[test]
    fn explicit_null_deserializes_to_null() {
        let body: Body = serde_json::from_str(r#"{"link": null}"#).unwrap();
        assert!(body.link.is_null());
        assert!(body.order.is_unset());
    }

    #[test]
    fn values_are_preserved() {
        let body: Body =
            serde_json::from_str(r#"{"link": "https://example.com", "order": 4}"#).unwrap();
        assert_eq!(body.link.as_value().map(String::as_str), Some("https://example.com"));
        assert_eq!(body.order, PatchField::Value(4));
    }

    #[test]
    fn map_keeps_the_shape() {
        assert_eq!(PatchField::Value(" x ".to_string()).map(|s| s.trim().to_string()),
            PatchField::Value("x".to_string()));
        assert_eq!(PatchField::<String>::Null.map(|s| s), PatchField::Null);
        assert!(PatchField::<String>::Unset.map(|s| s).is_unset());
    }
}
