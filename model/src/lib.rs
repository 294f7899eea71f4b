//! The credential schema value type shared by identity integration tests.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// A reference to the schema of a verifiable credential.
///
/// Both fields are opaque strings. An unset field is empty. Values are compared and hashed by
/// both fields, and cannot be changed once constructed.
///
/// ```
/// use credschema_model::CredentialSchema;
///
/// let built = CredentialSchema::builder()
///     .type_("VerifiableCredential")
///     .id("schema-1")
///     .build();
///
/// assert_eq!(built, CredentialSchema::new("schema-1", "VerifiableCredential"));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize, Eq, PartialEq, Hash, TypedBuilder)]
#[serde(default)]
pub struct CredentialSchema {
    /// Identifier of the schema.
    #[builder(default, setter(into))]
    id: String,

    /// Classification tag of the schema.
    #[builder(default, setter(into))]
    #[serde(rename = "type")]
    type_: String,
}

impl CredentialSchema {
    pub fn new(id: impl Into<String>, type_: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_: type_.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Consume the schema, returning `(id, type)`.
    pub fn into_parts(self) -> (String, String) {
        (self.id, self.type_)
    }
}

#[cfg(test)]
mod tests {
    use super::CredentialSchema;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn new_keeps_fields() {
        let schema = CredentialSchema::new("schema-1", "VerifiableCredential");

        assert_eq!(schema.id(), "schema-1");
        assert_eq!(schema.type_(), "VerifiableCredential");
    }

    #[test]
    fn default_is_unset() {
        let schema = CredentialSchema::default();

        assert_eq!(schema.id(), "");
        assert_eq!(schema.type_(), "");
        assert_eq!(schema, CredentialSchema::default());
    }

    #[test]
    fn equal_iff_both_fields_equal() {
        let schema = CredentialSchema::new("schema-1", "VerifiableCredential");

        assert_eq!(schema, schema.clone());
        assert_eq!(
            schema,
            CredentialSchema::new("schema-1", "VerifiableCredential")
        );
        assert_ne!(
            schema,
            CredentialSchema::new("schema-2", "VerifiableCredential")
        );
        assert_ne!(schema, CredentialSchema::new("schema-1", "JsonSchema"));

        // Swapping the values must not compare equal.
        assert_ne!(
            CredentialSchema::new("a", "b"),
            CredentialSchema::new("b", "a")
        );
    }

    #[test]
    fn equality_is_symmetric() {
        let pairs = [
            (CredentialSchema::new("x", "y"), CredentialSchema::new("x", "y")),
            (CredentialSchema::new("x", "y"), CredentialSchema::new("x", "z")),
            (CredentialSchema::default(), CredentialSchema::new("", "")),
            (CredentialSchema::default(), CredentialSchema::new("x", "")),
        ];

        for (left, right) in &pairs {
            assert_eq!(left == right, right == left, "{left:?} vs {right:?}");
        }
    }

    #[test]
    fn builder_matches_direct_construction() {
        let built = CredentialSchema::builder()
            .id("schema-1")
            .type_("VerifiableCredential")
            .build();

        assert_eq!(
            built,
            CredentialSchema::new("schema-1", "VerifiableCredential")
        );
        assert_ne!(
            built,
            CredentialSchema::new("schema-2", "VerifiableCredential")
        );
    }

    #[test]
    fn builder_setter_order_and_omission() {
        let reversed = CredentialSchema::builder()
            .type_("VerifiableCredential")
            .id("schema-1")
            .build();
        assert_eq!(
            reversed,
            CredentialSchema::new("schema-1", "VerifiableCredential")
        );

        let id_only = CredentialSchema::builder().id("schema-1").build();
        assert_eq!(id_only, CredentialSchema::new("schema-1", ""));

        assert_eq!(
            CredentialSchema::builder().build(),
            CredentialSchema::default()
        );
    }

    #[test]
    fn hash_consistent_with_equality() {
        let set = HashSet::from([
            CredentialSchema::new("schema-1", "VerifiableCredential"),
            CredentialSchema::builder()
                .id("schema-1")
                .type_("VerifiableCredential")
                .build(),
            CredentialSchema::new("schema-1", "JsonSchema"),
        ]);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&CredentialSchema::new("schema-1", "JsonSchema")));
    }

    #[test]
    fn into_parts() {
        let (id, type_) = CredentialSchema::new("schema-1", "VerifiableCredential").into_parts();

        assert_eq!(id, "schema-1");
        assert_eq!(type_, "VerifiableCredential");
    }

    #[test]
    fn serializes_type_key() {
        let schema = CredentialSchema::new("schema-1", "VerifiableCredential");

        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({"id": "schema-1", "type": "VerifiableCredential"})
        );
    }

    #[test]
    fn deserialize_missing_and_unknown_keys() {
        let empty: CredentialSchema = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, CredentialSchema::default());

        let partial: CredentialSchema =
            serde_json::from_value(json!({"type": "JsonSchema", "extra": 1})).unwrap();
        assert_eq!(partial, CredentialSchema::new("", "JsonSchema"));
    }
}
