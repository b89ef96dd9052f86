//! Repository viewer widgets.
//!
//! - [`FileTreePanel`] - Expandable file tree with cached-file indicators
//! - [`CodePane`] - Content pane with line numbers and a language badge

mod code_pane;
mod file_tree;

pub use code_pane::CodePane;
pub use file_tree::FileTreePanel;
