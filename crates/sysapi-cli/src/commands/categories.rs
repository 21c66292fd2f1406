use serde::Serialize;
use sysapi_core::Category;
use sysapi_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
    pub schemas: Vec<String>,
}

/// One summary per category, empty ones included, in display order.
pub fn summaries(registry: &SchemaRegistry) -> Vec<CategorySummary> {
    registry
        .schemas_by_category()
        .into_iter()
        .map(|(category, schemas)| CategorySummary {
            category,
            count: schemas.len(),
            schemas,
        })
        .collect()
}

/// Handle `sysapi categories`.
pub fn handle(registry: &SchemaRegistry, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&summaries(registry), flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_is_summarized_in_display_order() {
        let summaries = summaries(&sysapi_schema::SchemaRegistry::new());
        let order: Vec<Category> = summaries.iter().map(|s| s.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
        assert!(summaries.iter().all(|s| s.count == 0));
    }

    #[test]
    fn counts_add_up_to_registry_size() {
        let registry = sysapi_providers::registry();
        let total: usize = summaries(&registry).iter().map(|s| s.count).sum();
        assert_eq!(total, registry.schema_count());
    }
}
