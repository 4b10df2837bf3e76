//! Application entry points for the command line.

use crate::cli::{Command, USAGE};
use crate::host::CliHost;
use crate::script::Script;
use crate::shortcuts;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wireframe_core::{ConfigError, Editor, EditorConfig, SvgError};
use wireframe_render::{RenderContext, RendererError};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("SVG import failed: {0}")]
    Svg(#[from] SvgError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Rendering failed: {0}")]
    Render(#[from] RendererError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Command-line level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Where to write the final export. Standard output when unset.
    pub output: Option<PathBuf>,
    /// Accept confirmation prompts.
    pub assume_yes: bool,
    /// Editor configuration file. The default location when unset.
    pub config_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load the editor configuration this run should use.
    ///
    /// An explicit path must load; the default path falls back to defaults.
    pub fn editor_config(&self) -> AppResult<EditorConfig> {
        match &self.config_path {
            Some(path) => Ok(EditorConfig::load(path)?),
            None => match EditorConfig::default_path() {
                Ok(path) => Ok(EditorConfig::load_or_default(&path)),
                Err(e) => {
                    log::warn!("{e}; using default configuration");
                    Ok(EditorConfig::default())
                }
            },
        }
    }
}

/// The command-line application.
pub struct App;

impl App {
    /// Run a parsed command.
    pub fn run(command: Command, config: &AppConfig) -> AppResult<()> {
        match command {
            Command::Replay { script } => Self::replay(&script, config),
            Command::Convert { input, output } => Self::convert(&input, &output, config),
            Command::Shortcuts => {
                shortcuts::print_all();
                Ok(())
            }
            Command::Help => {
                println!("{USAGE}");
                Ok(())
            }
        }
    }

    /// Replay `script_path` and write the resulting drawing.
    pub fn replay(script_path: &Path, config: &AppConfig) -> AppResult<()> {
        let script = Script::from_json(&read(script_path)?)?;
        let base_dir = script_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let mut editor = Editor::new(config.editor_config()?);
        let artifact_dir = match &config.output {
            Some(path) => path.parent().map(Path::to_path_buf).unwrap_or_default(),
            None => base_dir.clone(),
        };
        let mut host = CliHost::new(config.assume_yes, artifact_dir);

        let summary = script.replay(&mut editor, &mut host, &base_dir);
        log::info!(
            "Replayed {} steps ({} without effect), {} shapes",
            summary.steps,
            summary.ignored,
            editor.document().len()
        );
        render_frame(&editor)?;

        let svg = editor.export_svg();
        match &config.output {
            Some(path) => write(path, &svg),
            None => {
                println!("{svg}");
                Ok(())
            }
        }
    }

    /// Import `input` and export it to `output`.
    pub fn convert(input: &Path, output: &Path, config: &AppConfig) -> AppResult<()> {
        let mut editor = Editor::new(config.editor_config()?);
        let count = editor.import_svg(&read(input)?)?;
        log::info!("Converted {count} shapes from {}", input.display());
        write(output, &editor.export_svg())
    }
}

/// Build the final frame at the canvas's logical size. Returns the number
/// of shapes drawn.
#[cfg(feature = "vello-renderer")]
fn render_frame(editor: &Editor) -> AppResult<usize> {
    use wireframe_render::{Renderer, VelloRenderer};

    let ctx = RenderContext::new(editor, editor.document().size());
    let mut renderer = VelloRenderer::new();
    renderer.build_scene(&ctx)?;
    if renderer.scene().encoding().is_empty() {
        return Err(RendererError::RenderFailed("empty scene".to_string()).into());
    }
    let items = ctx.items().len();
    log::debug!(
        "final frame: {} items, {} grid lines",
        items,
        ctx.grid_segments().len()
    );
    Ok(items)
}

/// Describe the final frame without a rendering backend.
#[cfg(not(feature = "vello-renderer"))]
fn render_frame(editor: &Editor) -> AppResult<usize> {
    let ctx = RenderContext::new(editor, editor.document().size());
    let items = ctx.items().len();
    log::debug!(
        "final frame: {} items, {} grid lines (no renderer)",
        items,
        ctx.grid_segments().len()
    );
    Ok(items)
}

fn read(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, contents: &str) -> AppResult<()> {
    fs::write(path, contents).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
