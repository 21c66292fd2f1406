//! OpenAPI export of the registry contents.
//!
//! The registry only knows schemas, so the document built here has no paths.
//! HTTP layers that serve a full API document embed [`SchemaRegistry::components`]
//! into their own document instead.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::registry::SchemaRegistry;

/// OpenAPI version emitted by [`SchemaRegistry::to_openapi`].
pub const OPENAPI_VERSION: &str = "3.0.3";

/// Document metadata for the `info` and `servers` sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub title: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub servers: Vec<String>,
}

impl SchemaRegistry {
    /// The OpenAPI `components` object: `{"schemas": {...}}`.
    #[must_use]
    pub fn components(&self) -> Value {
        json!({ "schemas": Value::Object(self.all_schemas()) })
    }

    /// Build a deterministic OpenAPI document holding every registered schema.
    ///
    /// Category grouping is attached as the `x-schema-categories` extension so
    /// documentation UIs can build one tab per category.
    #[must_use]
    pub fn to_openapi(&self, info: &DocumentInfo) -> Value {
        let mut info_section = Map::new();
        info_section.insert("title".into(), Value::String(info.title.clone()));
        info_section.insert("version".into(), Value::String(info.version.clone()));
        if let Some(description) = info.description.as_deref().filter(|d| !d.is_empty()) {
            info_section.insert("description".into(), Value::String(description.into()));
        }

        let servers: Vec<Value> = info.servers.iter().map(|url| json!({ "url": url })).collect();

        let categories: Map<String, Value> = self
            .schemas_by_category()
            .into_iter()
            .map(|(category, names)| (category.to_string(), json!(names)))
            .collect();

        json!({
            "openapi": OPENAPI_VERSION,
            "info": info_section,
            "servers": servers,
            "paths": {},
            "components": self.components(),
            "x-schema-categories": categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sysapi_core::{Category, ProviderGroup, SchemaMap};

    use super::*;

    fn storage() -> SchemaMap {
        let mut map = SchemaMap::new();
        map.insert(
            "DiskInfo".into(),
            json!({"type": "object", "properties": {"id": {"type": "string"}}}),
        );
        map
    }

    fn info() -> DocumentInfo {
        DocumentInfo {
            title: "Test API".into(),
            version: "2.1.0".into(),
            description: None,
            servers: vec!["http://localhost:9000".into()],
        }
    }

    fn registry() -> SchemaRegistry {
        let mut reg = SchemaRegistry::with_providers(vec![
            ProviderGroup::new("storage", Some(Category::Storage), storage).boxed(),
        ]);
        reg.register_all();
        reg
    }

    #[test]
    fn components_wraps_all_schemas() {
        let components = registry().components();
        assert_eq!(components["schemas"]["DiskInfo"]["type"], "object");
    }

    #[test]
    fn document_has_openapi_envelope() {
        let doc = registry().to_openapi(&info());
        assert_eq!(doc["openapi"], OPENAPI_VERSION);
        assert_eq!(doc["info"]["title"], "Test API");
        assert_eq!(doc["info"]["version"], "2.1.0");
        assert!(doc["info"].get("description").is_none());
        assert_eq!(doc["servers"][0]["url"], "http://localhost:9000");
        assert_eq!(doc["paths"], json!({}));
        assert_eq!(
            doc["components"]["schemas"]["DiskInfo"],
            json!({"type": "object", "properties": {"id": {"type": "string"}}})
        );
    }

    #[test]
    fn document_lists_every_category() {
        let doc = registry().to_openapi(&info());
        let categories = doc["x-schema-categories"].as_object().unwrap();
        assert_eq!(categories.len(), Category::ALL.len());
        assert_eq!(categories["Storage"], json!(["DiskInfo"]));
        assert_eq!(categories["VM"], json!([]));
    }

    #[test]
    fn description_is_emitted_when_present() {
        let mut info = info();
        info.description = Some("Manage the host".into());
        let doc = registry().to_openapi(&info);
        assert_eq!(doc["info"]["description"], "Manage the host");
    }
}
