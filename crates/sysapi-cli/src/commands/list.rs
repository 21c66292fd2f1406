use anyhow::Context;
use serde::Serialize;
use sysapi_core::Category;
use sysapi_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::output::output;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaRow {
    pub name: String,
    pub category: Category,
}

/// Registered schemas with their categories, sorted by name.
pub fn rows(registry: &SchemaRegistry, filter: Option<Category>) -> Vec<SchemaRow> {
    let mut rows: Vec<SchemaRow> = registry
        .schemas_by_category()
        .into_iter()
        .filter(|(category, _)| filter.is_none_or(|wanted| wanted == *category))
        .flat_map(|(category, names)| {
            names
                .into_iter()
                .map(move |name| SchemaRow { name, category })
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Handle `sysapi list`.
pub fn handle(args: &ListArgs, registry: &SchemaRegistry, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = args
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .context("invalid --category")?;

    output(&rows(registry, filter), flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lists_every_schema_once() {
        let registry = sysapi_providers::registry();
        let rows = rows(&registry, None);
        let names: Vec<String> = rows.iter().map(|row| row.name.clone()).collect();
        assert_eq!(names, registry.list());
    }

    #[test]
    fn category_filter_narrows_rows() {
        let registry = sysapi_providers::registry();
        let rows = rows(&registry, Some(Category::Vm));
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|row| row.category == Category::Vm));
        assert!(rows.iter().any(|row| row.name == "VmSnapshot"));
    }
}
