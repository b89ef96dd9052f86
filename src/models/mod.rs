//! Data models and types for the application.
//!
//! Contains:
//! - [`AppRoute`], [`CheckoutQuery`] - Hash-based navigation
//! - Wire DTOs for the backend API ([`UserData`], [`Repository`],
//!   [`TreeEntry`], ...)

mod api;
mod route;

pub use api::{
    DetailResponse, EntryKind, FileContentResponse, GitHubRepo, MessageResponse, Profile,
    RepoTreeResponse, Repository, TreeEntry, UploadRepositoryRequest, UserData, UserInfoResponse,
};
pub use route::{AppRoute, CheckoutQuery};
