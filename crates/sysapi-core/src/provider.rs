//! The contract between schema fragment providers and the registry.
//!
//! A provider is one functional group of schemas (auth, docker, storage, ...).
//! It returns a fresh name-to-definition map each time it is asked and keeps
//! no references to what it handed out.

use std::fmt;

use crate::category::Category;

/// A single schema body. The registry treats it as an opaque document.
pub type SchemaDefinition = serde_json::Value;

/// Schema name to definition mapping returned by every provider.
pub type SchemaMap = serde_json::Map<String, SchemaDefinition>;

/// A group of related schema fragments.
pub trait SchemaProvider: Send + Sync {
    /// Short identifier of the group, used in logs and collision reports.
    fn name(&self) -> &'static str;

    /// Category of every schema this group contributes.
    ///
    /// `None` defers classification to the registry's static name lists.
    fn category(&self) -> Option<Category>;

    /// Build the group's schemas. Must be pure and deterministic.
    fn schemas(&self) -> SchemaMap;
}

/// A provider backed by a plain function.
///
/// ```
/// use serde_json::json;
/// use sysapi_core::{Category, ProviderGroup, SchemaMap, SchemaProvider};
///
/// fn auth() -> SchemaMap {
///     let mut map = SchemaMap::new();
///     map.insert("LoginRequest".into(), json!({"type": "object"}));
///     map
/// }
///
/// let group = ProviderGroup::new("auth", Some(Category::Auth), auth);
/// assert_eq!(group.schemas().len(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct ProviderGroup {
    name: &'static str,
    category: Option<Category>,
    build: fn() -> SchemaMap,
}

impl ProviderGroup {
    #[must_use]
    pub const fn new(
        name: &'static str,
        category: Option<Category>,
        build: fn() -> SchemaMap,
    ) -> Self {
        Self {
            name,
            category,
            build,
        }
    }

    /// Box the group for use in a provider list.
    #[must_use]
    pub fn boxed(self) -> Box<dyn SchemaProvider> {
        Box::new(self)
    }
}

impl SchemaProvider for ProviderGroup {
    fn name(&self) -> &'static str {
        self.name
    }

    fn category(&self) -> Option<Category> {
        self.category
    }

    fn schemas(&self) -> SchemaMap {
        (self.build)()
    }
}

impl fmt::Debug for ProviderGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderGroup")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn docker() -> SchemaMap {
        let mut map = SchemaMap::new();
        map.insert("ContainerInfo".into(), json!({"type": "object"}));
        map
    }

    #[test]
    fn group_reports_name_and_category() {
        let group = ProviderGroup::new("docker", Some(Category::Docker), docker);
        assert_eq!(group.name(), "docker");
        assert_eq!(group.category(), Some(Category::Docker));
    }

    #[test]
    fn group_builds_a_fresh_map_each_call() {
        let group = ProviderGroup::new("docker", None, docker);
        let mut first = group.schemas();
        first.clear();
        assert_eq!(group.schemas().len(), 1);
    }

    #[test]
    fn boxed_group_keeps_its_identity() {
        let boxed = ProviderGroup::new("docker", None, docker).boxed();
        assert_eq!(boxed.name(), "docker");
        assert!(boxed.category().is_none());
        assert!(boxed.schemas().contains_key("ContainerInfo"));
    }
}
