//! The set of credential schemas served by this process.

use credschema_model::CredentialSchema;
use std::collections::HashSet;

/// Ordered collection of distinct credential schemas.
///
/// Schema ids are not unique: two schemas may share an id and differ in type. Lookups by id
/// resolve to whichever was listed first.
#[derive(Clone, Debug, Default)]
pub struct SchemaCatalog {
    schemas: Vec<CredentialSchema>,
}

impl SchemaCatalog {
    /// Build a catalog, keeping the first occurrence of each schema.
    pub fn new(schemas: impl IntoIterator<Item = CredentialSchema>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for schema in schemas {
            if seen.insert(schema.clone()) {
                kept.push(schema);
            } else {
                tracing::warn!(
                    id = schema.id(),
                    schema_type = schema.type_(),
                    "dropping duplicate credential schema"
                );
            }
        }

        Self { schemas: kept }
    }

    pub fn schemas(&self) -> &[CredentialSchema] {
        &self.schemas
    }

    pub fn find(&self, id: &str) -> Option<&CredentialSchema> {
        self.schemas.iter().find(|schema| schema.id() == id)
    }

    pub fn contains(&self, schema: &CredentialSchema) -> bool {
        self.schemas.contains(schema)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
