//! # chatdown
//!
//! Extract a conversation transcript from an exported chat HTML page and
//! render it as Markdown.
//!
//! ## Design
//!
//! The export marks every real content block (paragraphs, headings, lists,
//! tables) with a structural-path attribute, and interleaves citation
//! widgets, icons and buttons with the text. Conversion therefore:
//!
//! - **Walks structural blocks only**: blocks without the attribute are
//!   wrapper markup and never take part
//! - **Starts after a marker**: output begins after the first block whose
//!   text contains the caller's marker
//! - **Strips noise per block**: widgets are removed from a copy of each
//!   block before its text is read
//!
//! ## Example
//!
//! ```rust
//! use chatdown::ExtractService;
//!
//! let html = r#"
//!     <h2 data-path-to-node="0">START</h2>
//!     <p data-path-to-node="1">Hello <sup>1</sup>world</p>
//! "#;
//!
//! let service = ExtractService::with_marker("START");
//! let markdown = service.convert_html(html).unwrap();
//! assert!(markdown.ends_with("Hello world\n"));
//! ```

mod convert;
pub mod html;
pub mod node;
pub mod rules;
mod service;
mod utilities;

pub use convert::extract_text;
pub use html::parse_html;
pub use node::{Node, NodeType};
pub use rules::{Filter, Rules};
pub use service::{ExtractOptions, ExtractService, DEFAULT_MARKER};
pub use utilities::*;

/// Error type for chatdown operations
#[derive(Debug, thiserror::Error)]
pub enum ChatdownError {
    #[error("Marker not found: {0}")]
    MarkerNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ChatdownError>;

/// Convert a parsed document to Markdown, starting after `marker`.
///
/// Shorthand for an [`ExtractService`] with default options.
pub fn convert(document: &Node, marker: &str) -> Result<String> {
    ExtractService::with_marker(marker).convert(document)
}
