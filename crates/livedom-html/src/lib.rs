//! livedom HTML
//!
//! Turns rendered markup into a snapshot `Node`, built on html5ever.

mod parser;

pub use parser::SnapshotParser;

use livedom_vdom::Node;

/// Parse markup into a snapshot rooted at the first body element
pub fn parse(html: &str) -> Result<Node, ParseError> {
    SnapshotParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read markup: {0}")]
    Io(#[from] std::io::Error),

    #[error("Markup contains no root element")]
    NoRootElement,
}
