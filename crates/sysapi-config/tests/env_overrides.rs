use figment::Jail;
use sysapi_config::SysapiConfig;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("SYSAPI_DOCUMENT__TITLE", "Env API");
        jail.set_env("SYSAPI_REGISTRY__STRICT_CATEGORIES", "true");

        let config = SysapiConfig::load().expect("config loads");
        assert_eq!(config.document.title, "Env API");
        assert!(config.registry.strict_categories);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sysapi")?;
        jail.create_file(
            ".sysapi/config.toml",
            r#"
[document]
version = "1.1.0"
"#,
        )?;
        jail.set_env("SYSAPI_DOCUMENT__VERSION", "2.0.0");

        let config = SysapiConfig::load().expect("config loads");
        assert_eq!(config.document.version, "2.0.0");
        Ok(())
    });
}
