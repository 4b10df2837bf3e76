//! Wireframe Render Library
//!
//! Turns the editor model into frames. The default implementation uses
//! Vello; the frame description in [`RenderContext`] is backend-agnostic.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{DrawItem, RenderContext, RenderResult, Renderer, RendererError, ShapeRenderer};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
