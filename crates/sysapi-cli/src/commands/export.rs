use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use sysapi_config::DocumentConfig;
use sysapi_schema::{DocumentInfo, SchemaRegistry};

use crate::cli::root_commands::ExportArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExportSummary {
    path: String,
    schemas: usize,
}

fn document_info(config: &DocumentConfig) -> DocumentInfo {
    DocumentInfo {
        title: config.title.clone(),
        version: config.version.clone(),
        description: Some(config.description.clone()).filter(|d| !d.is_empty()),
        servers: config.servers.clone(),
    }
}

/// The exported JSON value: a full document or just `components`.
pub fn document(registry: &SchemaRegistry, config: &DocumentConfig, components_only: bool) -> Value {
    if components_only {
        registry.components()
    } else {
        registry.to_openapi(&document_info(config))
    }
}

/// Handle `sysapi export`.
pub fn handle(
    args: &ExportArgs,
    registry: &SchemaRegistry,
    config: &DocumentConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let document = document(registry, config, args.components_only);
    let rendered = if flags.format == OutputFormat::Raw {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };

    let Some(path) = &args.output else {
        println!("{rendered}");
        return Ok(());
    };

    std::fs::write(path, rendered + "\n")
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), schemas = registry.schema_count(), "exported OpenAPI document");

    output(
        &ExportSummary {
            path: path.display().to_string(),
            schemas: registry.schema_count(),
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::ColorMode;

    #[test]
    fn full_document_uses_configured_metadata() {
        let registry = sysapi_providers::registry();
        let config = DocumentConfig {
            title: "Tower API".into(),
            description: String::new(),
            ..Default::default()
        };
        let doc = document(&registry, &config, false);
        assert_eq!(doc["info"]["title"], "Tower API");
        assert!(doc["info"].get("description").is_none());
        assert_eq!(doc["servers"][0]["url"], "http://localhost:8080/api/v1");
    }

    #[test]
    fn components_only_skips_envelope() {
        let registry = sysapi_providers::registry();
        let doc = document(&registry, &DocumentConfig::default(), true);
        assert!(doc.get("openapi").is_none());
        assert_eq!(
            doc["schemas"].as_object().map(serde_json::Map::len),
            Some(registry.schema_count())
        );
    }

    #[test]
    fn export_writes_parseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.json");
        let args = ExportArgs {
            output: Some(path.clone()),
            components_only: false,
        };
        let flags = GlobalFlags {
            format: OutputFormat::Raw,
            color: ColorMode::Never,
            quiet: true,
            verbose: false,
        };
        let registry = sysapi_providers::registry();

        handle(&args, &registry, &DocumentConfig::default(), &flags).unwrap();

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["openapi"], "3.0.3");
        assert_eq!(
            written["components"]["schemas"].as_object().unwrap().len(),
            registry.schema_count()
        );
    }
}
