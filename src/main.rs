// SPDX-License-Identifier: MPL-2.0
use iced_notice::app::{self, config, paths, Flags};
use iced_notice::logging;

const HELP: &str = "\
iced_notice: queued banner notices demo

USAGE:
  iced_notice [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Read settings.toml from DIR
  --log-level <FILTER> Log filter directive (e.g. debug, iced_notice=trace)
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        eprintln!("Ignoring --config-dir: {err}");
        None
    });
    let log_level: Option<String> = args.opt_value_from_str("--log-level").unwrap_or_else(|err| {
        eprintln!("Ignoring --log-level: {err}");
        None
    });
    for extra in args.finish() {
        eprintln!("Ignoring unexpected argument: {}", extra.to_string_lossy());
    }

    paths::init_cli_override(config_dir);
    let (config, config_warning) = config::load();

    let level = log_level.as_deref().unwrap_or(config.log_level());
    if let Err(err) = logging::init(level) {
        eprintln!("{err}");
    }
    if let Some(warning) = &config_warning {
        tracing::warn!("{warning}");
    }

    app::run(Flags {
        config,
        config_warning,
    })
}
