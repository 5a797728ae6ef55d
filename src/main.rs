// SPDX-License-Identifier: MPL-2.0
use teamdeck::app::{self, paths, Flags};
use teamdeck::error::Error;
use teamdeck::presentation::Variant;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
teamdeck - Teamwork & Collaboration presentation

USAGE:
  teamdeck [OPTIONS]

OPTIONS:
  --variant <classic|scroll>  Deck layout (default from settings, else classic)
  --lang <LOCALE>             Interface language, e.g. en-US or fr
  --slide <N>                 One-based slide to open on
  --config-dir <DIR>          Directory holding settings.toml
  -h, --help                  Print this help

ENVIRONMENT:
  TEAMDECK_CONFIG_DIR         Config directory when --config-dir is absent
  RUST_LOG                    Log filter (default: info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let mut warnings = Vec::new();
    let variant = parse_or_warn(
        args.opt_value_from_str::<_, Variant>("--variant"),
        &mut warnings,
    );
    let lang = parse_or_warn(args.opt_value_from_str("--lang"), &mut warnings);
    let start_slide = parse_or_warn(args.opt_value_from_str("--slide"), &mut warnings);
    let config_dir = parse_or_warn(args.opt_value_from_str("--config-dir"), &mut warnings);

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
        push_once(&mut warnings, "warning-cli-invalid");
    }

    let flags = Flags {
        lang,
        variant,
        start_slide,
        config_dir,
        warnings,
    };
    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Keeps a valid option value; an invalid one is logged and reported in the UI.
fn parse_or_warn<T>(
    result: std::result::Result<Option<T>, pico_args::Error>,
    warnings: &mut Vec<String>,
) -> Option<T> {
    match result.map_err(Error::from) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "invalid command line argument");
            push_once(warnings, err.i18n_key());
            None
        }
    }
}

fn push_once(warnings: &mut Vec<String>, key: &str) {
    if !warnings.iter().any(|w| w == key) {
        warnings.push(key.to_string());
    }
}
