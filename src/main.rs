// SPDX-License-Identifier: MPL-2.0
use iced_weather::app::{self, config, paths, Dependencies, Flags};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Iced Weather

USAGE:
  iced_weather [OPTIONS]

OPTIONS:
  --lat <DEGREES>       Fixed latitude (requires --lon)
  --lon <DEGREES>       Fixed longitude (requires --lat)
  --night               Start with the night sky
  --config-dir <PATH>   Directory holding settings.toml
  --forecast-url <URL>  Forecast endpoint override
  -h, --help            Print this help

ENVIRONMENT:
  ICED_WEATHER_CONFIG_DIR  Config directory (overridden by --config-dir)
  RUST_LOG                 Log filter (default: info)
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("error: {e}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    let (mut config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    app::apply_flags(&mut config, &flags);

    // The only fatal condition: refuse to open a window without a usable endpoint.
    let deps = match Dependencies::from_config(&config) {
        Ok(deps) => deps,
        Err(e) => {
            tracing::error!(error = %e, "cannot start");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(endpoint = %deps.client.endpoint(), "starting");

    match app::run(config.display.start_at_night, deps) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "application error");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        latitude: args.opt_value_from_str("--lat")?,
        longitude: args.opt_value_from_str("--lon")?,
        night: args.contains("--night"),
        config_dir: args.opt_value_from_str("--config-dir")?,
        forecast_url: args.opt_value_from_str("--forecast-url")?,
    })
}
