use sysapi_config::SysapiConfig;
use sysapi_schema::SchemaRegistry;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Route a parsed command to its handler.
pub fn dispatch(
    command: &Commands,
    registry: &SchemaRegistry,
    config: &SysapiConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(args, registry, flags),
        Commands::Get(args) => commands::get::handle(args, registry, flags),
        Commands::Categories => commands::categories::handle(registry, flags),
        Commands::Check => {
            commands::check::handle(registry, config.registry.strict_categories, flags)
        }
        Commands::Export(args) => commands::export::handle(args, registry, &config.document, flags),
    }
}
