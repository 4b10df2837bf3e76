//! Wireframe Application
//!
//! Headless command-line shell: replays recorded input through the editor,
//! converts SVG files and documents the keyboard shortcuts.

mod app;
mod cli;
mod host;
mod script;
mod shortcuts;

pub use app::{App, AppConfig, AppError, AppResult};
pub use cli::{Command, USAGE, parse_args};
pub use host::CliHost;
pub use script::{ReplaySummary, Script, ScriptStep};
pub use shortcuts::print_all;
