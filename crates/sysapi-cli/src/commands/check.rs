use anyhow::bail;
use serde::Serialize;
use sysapi_schema::{ClassificationDrift, Collision, SchemaRegistry};

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// `ok`, `warn`, or `fail` (strict mode only).
    pub status: &'static str,
    pub schemas: usize,
    pub collisions: Vec<Collision>,
    pub unclassified: Vec<String>,
    pub drift: Vec<ClassificationDrift>,
}

impl CheckReport {
    fn has_category_gaps(&self) -> bool {
        !self.unclassified.is_empty() || !self.drift.is_empty()
    }
}

/// Collect registry consistency findings.
pub fn report(registry: &SchemaRegistry, strict: bool) -> CheckReport {
    let mut report = CheckReport {
        status: "ok",
        schemas: registry.schema_count(),
        collisions: registry.collisions().to_vec(),
        unclassified: registry.unclassified(),
        drift: registry.classification_drift(),
    };

    report.status = if strict && report.has_category_gaps() {
        "fail"
    } else if report.has_category_gaps() || !report.collisions.is_empty() {
        "warn"
    } else {
        "ok"
    };
    report
}

/// Handle `sysapi check`.
pub fn handle(registry: &SchemaRegistry, strict: bool, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = report(registry, strict);
    output(&report, flags.format)?;

    if report.status == "fail" {
        bail!(
            "category check failed: {} unclassified, {} drifting",
            report.unclassified.len(),
            report.drift.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use sysapi_core::{ProviderGroup, SchemaMap};

    use super::*;

    fn stray() -> SchemaMap {
        let mut map = SchemaMap::new();
        map.insert("GpuInfo".into(), json!({"type": "object"}));
        map
    }

    fn registry_with_gap() -> SchemaRegistry {
        let mut registry =
            SchemaRegistry::with_providers(vec![ProviderGroup::new("gpu", None, stray).boxed()]);
        registry.register_all();
        registry
    }

    #[test]
    fn builtin_registry_is_clean() {
        let report = report(&sysapi_providers::registry(), true);
        assert_eq!(report.status, "ok");
        assert!(report.collisions.is_empty());
    }

    #[test]
    fn gap_warns_in_lenient_mode() {
        let report = report(&registry_with_gap(), false);
        assert_eq!(report.status, "warn");
        assert_eq!(report.unclassified, vec!["GpuInfo".to_string()]);
    }

    #[test]
    fn gap_fails_in_strict_mode() {
        let report = report(&registry_with_gap(), true);
        assert_eq!(report.status, "fail");
    }
}
