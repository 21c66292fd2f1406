use sysapi_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GetArgs;
use crate::output::output;

/// Handle `sysapi get <name>`.
pub fn handle(args: &GetArgs, registry: &SchemaRegistry, flags: &GlobalFlags) -> anyhow::Result<()> {
    let definition = registry.get(&args.name)?;
    output(definition, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ColorMode, OutputFormat};

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            color: ColorMode::Never,
            quiet: true,
            verbose: false,
        }
    }

    #[test]
    fn unknown_name_surfaces_not_found() {
        let registry = sysapi_providers::registry();
        let args = GetArgs {
            name: "Bogus".into(),
        };
        let err = handle(&args, &registry, &flags()).unwrap_err();
        assert_eq!(err.to_string(), "Schema not found: Bogus");
    }

    #[test]
    fn known_name_succeeds() {
        let registry = sysapi_providers::registry();
        let args = GetArgs {
            name: "ContainerInfo".into(),
        };
        assert!(handle(&args, &registry, &flags()).is_ok());
    }
}
