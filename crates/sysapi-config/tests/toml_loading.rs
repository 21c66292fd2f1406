//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use sysapi_config::{ConfigError, SysapiConfig};

#[test]
fn loads_document_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[document]
title = "Tower API"
version = "2.3.0"
description = "Manage the tower"
servers = ["https://tower.local/api/v1", "http://10.0.0.5:8080/api/v1"]
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(SysapiConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = SysapiConfig::from_figment(figment).expect("config loads");

        assert_eq!(config.document.title, "Tower API");
        assert_eq!(config.document.version, "2.3.0");
        assert_eq!(config.document.description, "Manage the tower");
        assert_eq!(
            config.document.servers,
            vec!["https://tower.local/api/v1", "http://10.0.0.5:8080/api/v1"]
        );
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[document]
version = "0.9.0"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(SysapiConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = SysapiConfig::from_figment(figment).expect("config loads");

        assert_eq!(config.document.title, "System Management API");
        assert_eq!(config.document.version, "0.9.0");
        assert!(!config.registry.strict_categories);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sysapi")?;
        jail.create_file(
            ".sysapi/config.toml",
            r#"
[registry]
strict_categories = true
"#,
        )?;

        let config = SysapiConfig::load().expect("config loads");
        assert!(config.registry.strict_categories);
        Ok(())
    });
}

#[test]
fn blank_title_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[document]
title = ""
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(SysapiConfig::default()))
            .merge(Toml::file("config.toml"));
        let result = SysapiConfig::from_figment(figment);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[registry]
strict_categories = "sometimes"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(SysapiConfig::default()))
            .merge(Toml::file("config.toml"));
        let result = SysapiConfig::from_figment(figment);
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
