//! Command-line argument parsing.

use crate::app::{AppConfig, AppError};
use std::path::PathBuf;

/// Usage text printed by `wireframe help`.
pub const USAGE: &str = "\
Usage:
  wireframe replay <script.json> [-o <out.svg>] [--yes] [--config <path>]
  wireframe convert <in.svg> <out.svg> [--config <path>]
  wireframe shortcuts
  wireframe help";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replay an input script and export the result.
    Replay { script: PathBuf },
    /// Import an SVG file and export it again.
    Convert { input: PathBuf, output: PathBuf },
    /// Print the keyboard shortcut table.
    Shortcuts,
    /// Print usage.
    Help,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<(Command, AppConfig), AppError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = AppConfig::default();
    let mut positional = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--output" => config.output = Some(PathBuf::from(value_for(&arg, args.next())?)),
            "-y" | "--yes" => config.assume_yes = true,
            "-c" | "--config" => {
                config.config_path = Some(PathBuf::from(value_for(&arg, args.next())?))
            }
            "-h" | "--help" => return Ok((Command::Help, config)),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(AppError::Usage(format!("unknown option {flag}")));
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        Some("replay") => Command::Replay {
            script: PathBuf::from(required(positional.next(), "script path")?),
        },
        Some("convert") => Command::Convert {
            input: PathBuf::from(required(positional.next(), "input path")?),
            output: PathBuf::from(required(positional.next(), "output path")?),
        },
        Some("shortcuts") => Command::Shortcuts,
        Some("help") | None => Command::Help,
        Some(other) => return Err(AppError::Usage(format!("unknown command {other}"))),
    };

    if let Some(extra) = positional.next() {
        return Err(AppError::Usage(format!("unexpected argument {extra}")));
    }
    Ok((command, config))
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
}

fn required(value: Option<String>, what: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::Usage(format!("missing {what}")))
}
