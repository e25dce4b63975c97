//! Command dispatch

use tracing::{debug, instrument, warn};

use crate::application::StatusReport;
use crate::build_info::BUILD_INFO;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::infrastructure::env::{CANVUS_API_KEY, CANVUS_URL};

const BANNER_TITLE: &str = "Canvus CLI";

const BANNER_BODY: &[&str] = &[
    "This build is incomplete: only `version` and this status report are available.",
    "Resource commands (canvases, widgets, workspaces) are not implemented yet.",
];

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(reason) = &cli.rejected {
        warn!("arguments not understood ({}), falling back", reason);
    }

    match cli.command.clone().unwrap_or(Commands::Info) {
        Commands::Version => _version(),
        Commands::Info => {
            let (settings, problem) = load_settings(cli, cli.strict)?;
            _info(&settings, problem)
        }
        Commands::External(args) => _external(cli, &args),
    }
}

/// Load settings; outside strict mode a failure degrades to defaults.
///
/// The status display depends on the environment alone, so a bad config
/// file or `CANVUS_STRICT` value must not suppress it.
fn load_settings(cli: &Cli, strict: bool) -> CliResult<(Settings, Option<String>)> {
    match Settings::load(cli.config.as_deref()) {
        Ok(settings) => Ok((settings, None)),
        Err(e) if strict => Err(e.into()),
        Err(e) => {
            warn!("settings not loaded: {}", e);
            Ok((Settings::default(), Some(e.to_string())))
        }
    }
}

fn _external(cli: &Cli, args: &[String]) -> CliResult<()> {
    let name = args.first().cloned().unwrap_or_default();
    // flags after an unknown command are captured with it
    let strict_flag = cli.strict || args.iter().any(|a| a == "--strict");
    let (settings, problem) = load_settings(cli, strict_flag)?;
    if strict_flag || settings.strict {
        return Err(CliError::UnknownCommand(name));
    }
    warn!("unknown command '{}', showing status", name);
    _info(&settings, problem)
}

fn _version() -> CliResult<()> {
    debug!("build info: {:?}", BUILD_INFO);
    output::info(&BUILD_INFO);
    Ok(())
}

#[instrument(skip_all)]
fn _info(settings: &Settings, config_error: Option<String>) -> CliResult<()> {
    let report = StatusReport::collect(settings).with_config_error(config_error);

    output::header(BANNER_TITLE);
    output::info(&"=".repeat(BANNER_TITLE.len()));
    output::blank();
    for line in BANNER_BODY {
        output::info(line);
    }
    output::blank();
    output::info(&format!("SDK session type: {}", report.session_type));
    output::blank();

    let width = CANVUS_API_KEY.len();
    output::header("Environment variables:");
    output::field(CANVUS_URL, width, &report.env_url);
    output::field(CANVUS_API_KEY, width, &report.env_api_key);
    output::blank();

    output::header("Configuration:");
    output::field("config file", width, &report.config_file_display());
    output::field("url", width, &report.url);
    output::field("api key", width, &report.api_key);
    output::field("session", width, &report.session);
    Ok(())
}
