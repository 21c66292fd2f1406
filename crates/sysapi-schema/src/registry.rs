//! Central schema registry for the sysapi OpenAPI surface.
//!
//! The `SchemaRegistry` owns an ordered list of schema providers and, once
//! [`SchemaRegistry::register_all`] has run, the flat namespace of every
//! schema they contribute. Later providers overwrite earlier ones on name
//! collisions. After registration the registry is read-only.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use sysapi_core::{Category, SchemaDefinition, SchemaMap, SchemaProvider};

use crate::classifier;
use crate::error::SchemaError;

/// Provider name recorded for fragments added with [`SchemaRegistry::insert`].
pub const INSERTED_PROVIDER: &str = "inserted";

/// A registry shared read-only between request handlers.
pub type SharedRegistry = Arc<SchemaRegistry>;

/// A schema name defined by more than one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub name: String,
    /// Provider whose definition was discarded.
    pub replaced: &'static str,
    /// Provider whose definition is kept.
    pub winner: &'static str,
}

/// A declared category that disagrees with the static classifier lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationDrift {
    pub name: String,
    pub declared: Category,
    /// Category from the static lists, `None` if no list knows the name.
    pub listed: Option<Category>,
}

#[derive(Debug, Clone)]
struct RegisteredSchema {
    definition: SchemaDefinition,
    provider: &'static str,
    declared: Option<Category>,
}

/// Central store of all API schemas.
///
/// Built from an explicit provider list. Provides lookup by name, listing,
/// and grouping by display category.
#[derive(Default)]
pub struct SchemaRegistry {
    providers: Vec<Box<dyn SchemaProvider>>,
    schemas: HashMap<String, RegisteredSchema>,
    collisions: Vec<Collision>,
}

impl SchemaRegistry {
    /// Create an empty registry with no providers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry that will register `providers` in the given
    /// order. Call [`register_all`](Self::register_all) to populate it.
    #[must_use]
    pub fn with_providers(providers: Vec<Box<dyn SchemaProvider>>) -> Self {
        Self {
            providers,
            ..Self::default()
        }
    }

    /// Rebuild the namespace from every provider, in order.
    ///
    /// Each pass starts from an empty namespace, so running it again with
    /// unchanged providers yields an identical registry.
    pub fn register_all(&mut self) {
        self.schemas.clear();
        self.collisions.clear();

        let providers = std::mem::take(&mut self.providers);
        for provider in &providers {
            self.register_provider(provider.as_ref());
        }
        self.providers = providers;

        tracing::info!(
            providers = self.providers.len(),
            schemas = self.schemas.len(),
            collisions = self.collisions.len(),
            "schema registry populated"
        );

        for name in self.unclassified() {
            tracing::warn!(
                schema = %name,
                fallback = %Category::DEFAULT,
                "schema is not in any category list"
            );
        }
        for drift in self.classification_drift() {
            tracing::warn!(
                schema = %drift.name,
                declared = %drift.declared,
                listed = ?drift.listed,
                "declared category disagrees with category lists"
            );
        }
    }

    /// Copy one provider's schemas into the namespace, overwriting any
    /// existing entries with the same name.
    pub fn register_provider(&mut self, provider: &dyn SchemaProvider) {
        let name = provider.name();
        let declared = provider.category();
        let schemas = provider.schemas();
        tracing::debug!(provider = name, schemas = schemas.len(), "registering provider");

        for (schema, definition) in schemas {
            self.insert_from(name, schema, definition, declared);
        }
    }

    /// Register a single fragment outside any provider.
    ///
    /// Collisions are recorded with [`INSERTED_PROVIDER`] as the provider
    /// name. The next [`register_all`](Self::register_all) pass discards
    /// inserted fragments.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        definition: SchemaDefinition,
        category: Option<Category>,
    ) {
        self.insert_from(INSERTED_PROVIDER, name.into(), definition, category);
    }

    fn insert_from(
        &mut self,
        provider: &'static str,
        schema: String,
        definition: SchemaDefinition,
        declared: Option<Category>,
    ) {
        let entry = RegisteredSchema {
            definition,
            provider,
            declared,
        };
        if let Some(previous) = self.schemas.insert(schema.clone(), entry) {
            tracing::warn!(
                schema = %schema,
                replaced = previous.provider,
                winner = provider,
                "schema name collision, later provider wins"
            );
            self.collisions.push(Collision {
                name: schema,
                replaced: previous.provider,
                winner: provider,
            });
        }
    }

    /// Export the full name-to-definition mapping.
    ///
    /// The result is a copy; changing it does not affect the registry.
    #[must_use]
    pub fn all_schemas(&self) -> SchemaMap {
        self.schemas
            .iter()
            .map(|(name, entry)| (name.clone(), entry.definition.clone()))
            .collect()
    }

    /// Get a schema by name.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if no provider registered `name`.
    pub fn get(&self, name: &str) -> Result<&SchemaDefinition, SchemaError> {
        self.schemas
            .get(name)
            .map(|entry| &entry.definition)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Whether a schema with this exact name is registered.
    #[must_use]
    pub fn has_schema(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.schemas.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Category of a registered schema.
    ///
    /// The contributing provider's declared category wins; otherwise the
    /// static lists decide, falling back to [`Category::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if `name` is not registered.
    pub fn category_of(&self, name: &str) -> Result<Category, SchemaError> {
        self.schemas
            .get(name)
            .map(|entry| resolve_category(name, entry))
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Group every registered name by category.
    ///
    /// All categories are present as keys, empty ones included. Names within
    /// a category are sorted.
    #[must_use]
    pub fn schemas_by_category(&self) -> BTreeMap<Category, Vec<String>> {
        let mut grouped: BTreeMap<Category, Vec<String>> = Category::ALL
            .into_iter()
            .map(|category| (category, Vec::new()))
            .collect();

        for (name, entry) in &self.schemas {
            grouped
                .entry(resolve_category(name, entry))
                .or_default()
                .push(name.clone());
        }
        for names in grouped.values_mut() {
            names.sort_unstable();
        }
        grouped
    }

    /// Names with no declared category that no static list claims.
    ///
    /// These land in [`Category::DEFAULT`] and usually mean a category list
    /// is out of date.
    #[must_use]
    pub fn unclassified(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .schemas
            .iter()
            .filter(|(name, entry)| entry.declared.is_none() && classifier::lookup(name).is_none())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort_unstable();
        names
    }

    /// Declared categories that the static lists disagree with.
    #[must_use]
    pub fn classification_drift(&self) -> Vec<ClassificationDrift> {
        let mut drift: Vec<ClassificationDrift> = self
            .schemas
            .iter()
            .filter_map(|(name, entry)| {
                let declared = entry.declared?;
                let listed = classifier::lookup(name);
                (listed != Some(declared)).then(|| ClassificationDrift {
                    name: name.clone(),
                    declared,
                    listed,
                })
            })
            .collect();
        drift.sort_by(|a, b| a.name.cmp(&b.name));
        drift
    }

    /// Collisions recorded by the most recent registration pass.
    #[must_use]
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Freeze the registry for sharing across threads.
    #[must_use]
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(self)
    }
}

fn resolve_category(name: &str, entry: &RegisteredSchema) -> Category {
    entry
        .declared
        .unwrap_or_else(|| classifier::classify(name))
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let providers: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("SchemaRegistry")
            .field("providers", &providers)
            .field("schemas", &self.schemas.len())
            .field("collisions", &self.collisions.len())
            .finish()
    }
}
