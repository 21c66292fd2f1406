//! # sysapi-providers
//!
//! Schema fragment providers for every functional domain of the sysapi
//! surface. Each module exposes a `schemas()` function returning its
//! name-to-schema map; [`GROUPS`] pairs each with its declared category in
//! registration order.
//!
//! ```no_run
//! let registry = sysapi_providers::registry();
//! assert!(registry.has_schema("ContainerInfo"));
//! ```

#![recursion_limit = "256"]

pub mod async_operations;
pub mod auth;
pub mod common;
pub mod diagnostics;
pub mod docker;
pub mod documentation;
pub mod errors;
pub mod notifications;
pub mod operations;
pub mod rate_limiting;
pub mod responses;
pub mod storage;
pub mod system;
pub mod vm;
pub mod websocket;

use sysapi_core::{Category, ProviderGroup, SchemaProvider};
use sysapi_schema::SchemaRegistry;

/// Every built-in provider group, in registration order.
///
/// Later groups win name collisions, so shared building blocks come first.
pub const GROUPS: [ProviderGroup; 15] = [
    ProviderGroup::new("common", Some(Category::Common), common::schemas),
    ProviderGroup::new("errors", Some(Category::Errors), errors::schemas),
    ProviderGroup::new("responses", Some(Category::Responses), responses::schemas),
    ProviderGroup::new(
        "documentation",
        Some(Category::Responses),
        documentation::schemas,
    ),
    ProviderGroup::new("auth", Some(Category::Auth), auth::schemas),
    ProviderGroup::new("system", Some(Category::System), system::schemas),
    ProviderGroup::new("docker", Some(Category::Docker), docker::schemas),
    ProviderGroup::new("vm", Some(Category::Vm), vm::schemas),
    ProviderGroup::new("storage", Some(Category::Storage), storage::schemas),
    ProviderGroup::new("websocket", Some(Category::WebSocket), websocket::schemas),
    ProviderGroup::new(
        "notifications",
        Some(Category::Notifications),
        notifications::schemas,
    ),
    ProviderGroup::new(
        "diagnostics",
        Some(Category::Diagnostics),
        diagnostics::schemas,
    ),
    ProviderGroup::new("operations", Some(Category::Operations), operations::schemas),
    ProviderGroup::new(
        "async_operations",
        Some(Category::AsyncOperations),
        async_operations::schemas,
    ),
    ProviderGroup::new(
        "rate_limiting",
        Some(Category::RateLimiting),
        rate_limiting::schemas,
    ),
];

/// Boxed provider list for [`SchemaRegistry::with_providers`].
#[must_use]
pub fn all() -> Vec<Box<dyn SchemaProvider>> {
    GROUPS.into_iter().map(ProviderGroup::boxed).collect()
}

/// Build a registry populated with every built-in group.
#[must_use]
pub fn registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::with_providers(all());
    registry.register_all();
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_names_are_unique() {
        let mut names: Vec<&str> = GROUPS.iter().map(SchemaProvider::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), GROUPS.len());
    }

    #[test]
    fn every_group_declares_a_category() {
        for group in &GROUPS {
            assert!(group.category().is_some(), "{} has no category", group.name());
        }
    }

    #[test]
    fn every_category_has_a_group() {
        for category in Category::ALL {
            assert!(
                GROUPS.iter().any(|g| g.category() == Some(category)),
                "no group for {category}"
            );
        }
    }

    #[test]
    fn no_group_is_empty() {
        for group in &GROUPS {
            assert!(!group.schemas().is_empty(), "{} is empty", group.name());
        }
    }
}
