//! Markup rendering for assistant messages.
//!
//! Assistant replies arrive as markdown. Instead of handing that text to
//! a raw-markup sink, this crate parses it into a small, schema-bound
//! tree of blocks and inlines that any presentation layer can walk. User
//! messages are never parsed; they stay literal text.

mod markdown;

pub use markdown::{Block, Inline, RenderedContent, render_markdown, rendered_content};
