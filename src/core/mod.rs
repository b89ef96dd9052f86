//! Non-visual domain logic.
//!
//! - [`tree`] - Fold a flat path list into the repository forest
//! - [`viewer`] - Selection, expansion, and content cache for one view
//! - [`api`] - Typed calls to the backend endpoints
//! - [`auth`] - Session cookie collaborator
//! - [`error`] - Error types

pub mod api;
pub mod auth;
pub mod error;
pub mod tree;
pub mod viewer;

pub use error::FetchError;
pub use tree::{FileTree, TreeNode, split_segments};
pub use viewer::{ContentCache, FileContent, OpenOutcome, ViewerState};
