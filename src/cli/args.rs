//! CLI argument definitions using clap

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Command-line client for the Canvus collaboration platform
#[derive(Parser, Debug)]
#[command(name = "canvus")]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(allow_external_subcommands = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Fail on unknown commands instead of showing status
    #[arg(long, global = true)]
    pub strict: bool,

    /// Config file (default: $XDG_CONFIG_HOME/canvus/canvus.toml)
    #[arg(long, global = true, env = "CANVUS_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Parse failure that was downgraded to the status display
    #[arg(skip)]
    pub rejected: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print version, commit and build date
    Version,

    /// Show SDK and environment status
    Info,

    /// Anything else; shows status (or fails with --strict)
    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Cli {
    /// Parse arguments without rejecting unknown input.
    ///
    /// Help requests come back as `Err` for the caller to print and exit.
    /// Any other parse failure yields an `External` command carrying the raw
    /// arguments, so dispatch decides whether it is fatal.
    pub fn parse_lenient<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Self::try_parse_from(args.clone()) {
            Ok(cli) => Ok(cli),
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp
                        | ErrorKind::DisplayVersion
                        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) =>
            {
                Err(e)
            }
            Err(e) => {
                let rest: Vec<String> = args
                    .iter()
                    .skip(1)
                    .map(|a| a.to_string_lossy().into_owned())
                    .collect();
                // Extra arguments after a known command are ignored.
                let command = match rest.first().map(String::as_str) {
                    Some("version") => Commands::Version,
                    Some("info") => Commands::Info,
                    _ => Commands::External(rest.clone()),
                };
                Ok(Self {
                    debug: debug_count(&rest),
                    strict: rest.iter().any(|a| a == "--strict"),
                    config: config_path(&rest)
                        .or_else(|| std::env::var_os("CANVUS_CONFIG"))
                        .map(PathBuf::from),
                    rejected: Some(format!("{:?}", e.kind())),
                    command: Some(command),
                })
            }
        }
    }
}

/// Count `-d`, `-dd`, `--debug` occurrences in raw arguments.
fn debug_count(args: &[String]) -> u8 {
    args.iter()
        .map(|a| match a.as_str() {
            "--debug" => 1,
            short if short.len() > 1
                && short.starts_with('-')
                && !short.starts_with("--")
                && short[1..].chars().all(|c| c == 'd') =>
            {
                short.len() - 1
            }
            _ => 0,
        })
        .fold(0u8, |n, c| n.saturating_add(u8::try_from(c).unwrap_or(u8::MAX)))
}

/// Last `--config PATH` or `--config=PATH` in raw arguments.
fn config_path(args: &[String]) -> Option<OsString> {
    let mut found = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            found = iter.next().cloned();
        } else if let Some(path) = arg.strip_prefix("--config=") {
            found = Some(path.to_string());
        }
    }
    found.map(OsString::from)
}
