//! SVG import and export.

mod export;
mod import;

pub use export::export_document;
pub use import::{ImportOptions, import_document};

use thiserror::Error;

/// File name offered to the host for exported drawings.
pub const ARTIFACT_NAME: &str = "drawing.svg";

/// `data-role` value marking the exported background rectangle.
pub const BACKGROUND_ROLE: &str = "background";

/// SVG errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SvgError {
    #[error("Invalid SVG: missing <svg> element")]
    MissingRoot,
    #[error("Invalid SVG: {0}")]
    Malformed(String),
}

/// Result type for SVG operations.
pub type SvgResult<T> = Result<T, SvgError>;
