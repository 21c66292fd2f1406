use anyhow::Context;
use clap::Parser;
use sysapi_config::SysapiConfig;

mod cli;
mod commands;
mod output;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("sysapi error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(ui::default_log_level(&flags))?;
    ui::init(&flags);

    let config = SysapiConfig::load_with_dotenv().context("failed to load sysapi configuration")?;
    tracing::debug!(
        title = %config.document.title,
        strict = config.registry.strict_categories,
        "configuration loaded"
    );

    let registry = sysapi_providers::registry();
    commands::dispatch::dispatch(&cli.command, &registry, &config, &flags)
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("SYSAPI_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
