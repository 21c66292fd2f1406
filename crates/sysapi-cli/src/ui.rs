use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let table_color = table_color(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    );

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        term_width,
    });
}

fn table_color(flags: &GlobalFlags, is_tty: bool, no_color: bool) -> bool {
    match flags.color {
        ColorMode::Always => flags.format == OutputFormat::Table,
        ColorMode::Never => false,
        ColorMode::Auto => {
            is_tty && flags.format == OutputFormat::Table && !flags.quiet && !no_color
        }
    }
}

/// Log level used when `SYSAPI_LOG` is unset.
#[must_use]
pub const fn default_log_level(flags: &GlobalFlags) -> &'static str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(color: ColorMode, quiet: bool, verbose: bool) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Table,
            color,
            quiet,
            verbose,
        }
    }

    #[test]
    fn quiet_disables_auto_color() {
        assert!(table_color(&flags(ColorMode::Auto, false, false), true, false));
        assert!(!table_color(&flags(ColorMode::Auto, true, false), true, false));
        assert!(table_color(&flags(ColorMode::Always, true, false), false, false));
    }

    #[test]
    fn auto_color_respects_tty_and_no_color() {
        let auto = flags(ColorMode::Auto, false, false);
        assert!(!table_color(&auto, false, false));
        assert!(!table_color(&auto, true, true));
    }

    #[test]
    fn log_level_follows_quiet_then_verbose() {
        assert_eq!(default_log_level(&flags(ColorMode::Never, false, false)), "warn");
        assert_eq!(default_log_level(&flags(ColorMode::Never, false, true)), "debug");
        assert_eq!(default_log_level(&flags(ColorMode::Never, true, true)), "error");
    }
}
