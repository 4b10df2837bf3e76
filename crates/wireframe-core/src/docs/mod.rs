//! Documentation collaborators: markup rendering, caching and loading.
//!
//! Rendering itself belongs to the host; this module defines the seams and
//! the load path with its failure fallback.

mod cache;
mod loader;
mod source;

pub use cache::DocumentCache;
pub use loader::{DocumentLoader, ERROR_MARKUP, LoadStatus, LoadedDocument};
pub use source::{FileSource, MemorySource};

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;
use xmlwriter::{Indent, Options, XmlWriter};

/// Document errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocError {
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Invalid document id: {0}")]
    InvalidId(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Document error: {0}")]
    Other(String),
}

/// Result type for document operations.
pub type DocResult<T> = Result<T, DocError>;

/// Boxed future for async operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Turns document text into display markup.
pub trait MarkupRenderer: Send + Sync {
    /// Render document text to sanitized markup.
    fn render(&self, text: &str) -> String;

    /// Highlight a code block. An absent or unknown `language` falls back
    /// to automatic detection.
    fn highlight(&self, code: &str, language: Option<&str>) -> String;

    /// Whether `language` is known to the highlighter.
    fn has_language(&self, language: &str) -> bool;
}

/// Fetches raw document text by id.
pub trait DocumentSource: Send + Sync {
    /// Fetch a document.
    fn fetch(&self, id: &str) -> BoxFuture<'_, DocResult<String>>;
}

/// Renderer that shows text verbatim, escaped inside `<pre>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl MarkupRenderer for PlainTextRenderer {
    fn render(&self, text: &str) -> String {
        wrap_escaped("pre", text)
    }

    fn highlight(&self, code: &str, _language: Option<&str>) -> String {
        wrap_escaped("code", code)
    }

    fn has_language(&self, _language: &str) -> bool {
        false
    }
}

fn wrap_escaped(element: &str, text: &str) -> String {
    let mut xml = XmlWriter::new(Options {
        indent: Indent::None,
        ..Options::default()
    });
    xml.set_preserve_whitespaces(true);
    xml.start_element(element);
    xml.write_text(text);
    xml.end_document()
}

#[cfg(test)]
pub(crate) fn block_on<F: Future>(f: F) -> F::Output {
    // Simple blocking executor for tests
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {}
        }
    }
}
