//! The built-in provider set registered end to end.

use std::collections::{BTreeSet, HashMap};

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;
use sysapi_core::{Category, SchemaProvider};
use sysapi_providers::{GROUPS, all, registry};
use sysapi_schema::{DocumentInfo, SchemaError, classifier};

const REF_PREFIX: &str = "#/components/schemas/";

fn collect_refs(value: &Value, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if key == "$ref" {
                    if let Some(target) = child.as_str() {
                        out.insert(target.to_string());
                    }
                } else {
                    collect_refs(child, out);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_refs(item, out);
            }
        }
        _ => {}
    }
}

#[test]
fn provider_name_sets_are_disjoint() {
    let mut owners: HashMap<String, &str> = HashMap::new();
    for group in &GROUPS {
        for name in group.schemas().keys() {
            if let Some(previous) = owners.insert(name.clone(), group.name()) {
                panic!("{name} defined by both {previous} and {}", group.name());
            }
        }
    }
}

#[test]
fn registry_is_union_of_all_groups() {
    let reg = registry();
    let expected: BTreeSet<String> = all()
        .iter()
        .flat_map(|group| group.schemas().into_iter().map(|(name, _)| name))
        .collect();
    assert_eq!(reg.list().into_iter().collect::<BTreeSet<_>>(), expected);
    assert!(reg.collisions().is_empty());
}

#[test]
fn registered_definitions_equal_provider_output() {
    let reg = registry();
    for group in all() {
        for (name, definition) in group.schemas() {
            assert_eq!(reg.get(&name).unwrap(), &definition, "{name}");
        }
    }
}

#[test]
fn category_lists_match_declared_categories() {
    let reg = registry();
    let drift = reg.classification_drift();
    assert!(drift.is_empty(), "drift: {drift:?}");
    assert!(reg.unclassified().is_empty());
}

#[test]
fn category_lists_name_only_registered_schemas() {
    let reg = registry();
    for category in Category::ALL {
        for name in classifier::listed_names(category) {
            assert!(reg.has_schema(name), "{category} lists unknown schema {name}");
        }
    }
}

#[test]
fn every_reference_resolves() {
    let reg = registry();
    let mut refs = BTreeSet::new();
    for definition in reg.all_schemas().values() {
        collect_refs(definition, &mut refs);
    }
    assert!(!refs.is_empty());
    for target in refs {
        let name = target
            .strip_prefix(REF_PREFIX)
            .unwrap_or_else(|| panic!("unexpected $ref {target}"));
        assert!(reg.has_schema(name), "dangling $ref {target}");
    }
}

#[rstest]
#[case("Timestamp", Category::Common)]
#[case("ContainerInfo", Category::Docker)]
#[case("SystemStats", Category::System)]
#[case("ArrayStatus", Category::Storage)]
#[case("VmCreateRequest", Category::Vm)]
#[case("WebSocketEvent", Category::WebSocket)]
#[case("LoginRequest", Category::Auth)]
#[case("LogEntry", Category::Diagnostics)]
#[case("NotificationChannel", Category::Notifications)]
#[case("ScheduledTask", Category::Operations)]
#[case("AsyncOperation", Category::AsyncOperations)]
#[case("RateLimitExceeded", Category::RateLimiting)]
#[case("ValidationErrorResponse", Category::Errors)]
#[case("ApiInfo", Category::Responses)]
#[case("BatchResponse", Category::Responses)]
fn builtin_schema_categories(#[case] name: &str, #[case] expected: Category) {
    assert_eq!(registry().category_of(name).unwrap(), expected);
}

#[test]
fn every_category_is_populated() {
    let grouped = registry().schemas_by_category();
    for (category, names) in &grouped {
        assert!(!names.is_empty(), "{category} is empty");
    }
}

#[test]
fn auth_end_to_end() {
    let reg = registry();
    let grouped = reg.schemas_by_category();
    assert!(grouped[&Category::Auth].contains(&"LoginRequest".to_string()));
    assert!(grouped[&Category::Auth].contains(&"UserInfo".to_string()));

    let login = reg.get("LoginRequest").unwrap();
    assert_eq!(login, &sysapi_providers::auth::schemas()["LoginRequest"]);
    assert_eq!(login["required"], serde_json::json!(["username", "password"]));
}

#[test]
fn unknown_schema_is_not_found() {
    assert_eq!(
        registry().get("ContainerInfoV2"),
        Err(SchemaError::NotFound("ContainerInfoV2".into()))
    );
}

#[test]
fn openapi_document_embeds_every_schema() {
    let reg = registry();
    let doc = reg.to_openapi(&DocumentInfo {
        title: "System Management API".into(),
        version: "1.0.0".into(),
        description: None,
        servers: vec![],
    });
    let schemas = doc["components"]["schemas"].as_object().unwrap();
    assert_eq!(schemas.len(), reg.schema_count());
    assert_eq!(schemas["ErrorResponse"]["type"], "object");
}
