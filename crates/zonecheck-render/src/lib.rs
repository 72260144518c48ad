//! Rendering utilities for evaluation results (terminal text, Markdown).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{RenderableEntry, RenderableFacts, RenderableReport};
pub use text::render_text;
