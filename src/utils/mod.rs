//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch`] - Credentialed network fetching with timeout
//! - [`dom`] - Browser API access (cookies, hash, clipboard, dialogs)
//! - [`format`] - Display formatting (sizes, languages)
//! - [`url`] - Percent-encoding helpers

pub mod dom;
pub mod fetch;
pub mod format;
pub mod url;
