use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use compte_est_bon::{Console, Session, SessionConfig, TerminalConsole};
use log::{debug, info, warn};
use thiserror::Error;

/// Le Compte est Bon - reach a three-digit target from six drawn tiles
#[derive(Parser, Debug)]
#[command(name = "compte-est-bon")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliArgs {
    /// Print usage and exit
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,
}

/// Errors raised while reading the command line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    #[error("Argument: \"{0}\" unknown")]
    Unknown(String),
}

/// What the command line asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Help,
}

/// How the program should exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Played,
    Help,
    ArgumentError,
}

fn is_help_flag(arg: &str) -> bool {
    matches!(
        arg.to_lowercase().as_str(),
        "--help" | "-h" | "/help" | "/h"
    )
}

/// Parse the full argument list, program name included.
///
/// Help flags are recognized in any case and in their `/help`, `/h` forms. A
/// leading help flag wins over anything after it; otherwise the first token
/// that is not a help flag is reported as unknown.
///
/// # Errors
///
/// Returns `ArgError::Unknown` for any unrecognized token.
pub fn parse_args<I, T>(args: I) -> Result<Command, ArgError>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let rest = args.get(1..).unwrap_or_default();

    let normalized = args.iter().enumerate().map(|(i, arg)| {
        if i > 0 && is_help_flag(arg) {
            "--help".to_string()
        } else {
            arg.clone()
        }
    });

    match CliArgs::try_parse_from(normalized) {
        Ok(parsed) if parsed.help => return Ok(Command::Help),
        // clap takes a bare `--` as the end of options, which is still a token
        Ok(_) if rest.is_empty() => return Ok(Command::Play),
        Ok(_) => debug!("Command line has extra tokens: {:?}", rest),
        Err(err) => debug!("Command line rejected: {:?}", err.kind()),
    }

    if rest.first().is_some_and(|arg| is_help_flag(arg)) {
        return Ok(Command::Help);
    }
    let unknown = rest
        .iter()
        .find(|arg| !is_help_flag(arg))
        .cloned()
        .unwrap_or_default();
    Err(ArgError::Unknown(unknown))
}

/// Initialize logging from `RUST_LOG`, warnings only by default
pub fn init_logging() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<Exit> {
    init_logging()?;

    let mut console = TerminalConsole::stdio();

    match parse_args(std::env::args()) {
        Ok(Command::Help) => {
            console.show_help()?;
            return Ok(Exit::Help);
        }
        Err(err) => {
            warn!("Rejecting command line: {}", err);
            console.show_error(&err.to_string())?;
            console.show_help()?;
            return Ok(Exit::ArgumentError);
        }
        Ok(Command::Play) => {}
    }

    let session = Session::new(SessionConfig::default());
    let rounds = session
        .run(&mut console, &mut rand::rng())
        .context("Game session failed")?;
    info!("Played {} rounds", rounds);

    Ok(Exit::Played)
}
