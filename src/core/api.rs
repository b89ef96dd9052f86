//! Typed surface over the backend's REST endpoints.
//!
//! Every call attaches the session cookies; URL construction and response
//! envelopes live here so pages never hand-assemble endpoint strings.

use crate::config::BACKEND_URL;
use crate::core::error::FetchError;
use crate::models::{
    FileContentResponse, GitHubRepo, MessageResponse, Profile, RepoTreeResponse, Repository,
    UploadRepositoryRequest, UserData, UserInfoResponse,
};
use crate::utils::fetch;
use crate::utils::url::percent_encode;

/// Fetch a user's profile and repository lists; the session user when no
/// username is given.
pub async fn get_user_info(username: Option<&str>) -> Result<UserData, FetchError> {
    let url = match username {
        Some(username) => format!(
            "{}/get_user_info?username={}",
            BACKEND_URL,
            percent_encode(username)
        ),
        None => format!("{}/get_user_info", BACKEND_URL),
    };
    let response: UserInfoResponse = fetch::get_json(&url).await?;
    Ok(response.user)
}

/// List the session user's repositories on GitHub, for import.
pub async fn github_repositories() -> Result<Vec<GitHubRepo>, FetchError> {
    fetch::get_json(&format!("{}/get_github_repositories", BACKEND_URL)).await
}

/// List a repository for sale.
pub async fn upload_repository(name: &str, url: &str) -> Result<(), FetchError> {
    let body = UploadRepositoryRequest {
        name_repository: name.to_string(),
        url_repository: url.to_string(),
    };
    fetch::post_json_ok(&format!("{}/upload_repository", BACKEND_URL), &body).await
}

/// Remove one of the session user's listings.
pub async fn delete_repository(repository_id: u64) -> Result<(), FetchError> {
    fetch::delete_ok(&format!("{}/delete_repository/{}", BACKEND_URL, repository_id)).await
}

/// Public marketplace listings.
pub async fn marketplace_repositories() -> Result<Vec<Repository>, FetchError> {
    fetch::get_json(&format!("{}/marketplace/repositories", BACKEND_URL)).await
}

/// Flat file listing of a listed repository.
pub async fn repo_tree(
    owner: &str,
    repo: &str,
    branch: &str,
) -> Result<RepoTreeResponse, FetchError> {
    let url = format!(
        "{}/tree?repository={}&username={}&branch={}",
        BACKEND_URL,
        percent_encode(repo),
        percent_encode(owner),
        percent_encode(branch)
    );
    fetch::get_json(&url).await
}

/// Contents of one file of a listed repository.
pub async fn file_content(owner: &str, repo: &str, path: &str) -> Result<String, FetchError> {
    let url = format!(
        "{}/file?path={}&owner={}&repo={}",
        BACKEND_URL,
        percent_encode(path),
        percent_encode(owner),
        percent_encode(repo)
    );
    let response: FileContentResponse = fetch::get_json(&url).await?;
    Ok(response.content)
}

/// Order-creation URL for a listing. Priced repositories answer this with a
/// redirect to the payment processor, so callers navigate the whole window
/// there; free ones answer JSON (see [`acquire_free`]).
pub fn create_order_url(repo: &Repository, seller: &Profile) -> String {
    format!(
        "{}/create-order/{}?seller_id={}&repo_url={}&repo_price={}",
        BACKEND_URL,
        percent_encode(&repo.name),
        seller.id,
        percent_encode(&repo.url),
        repo.price.unwrap_or(0.0)
    )
}

/// Acquire a free listing directly, without the processor round-trip.
pub async fn acquire_free(
    repo: &Repository,
    seller: &Profile,
) -> Result<MessageResponse, FetchError> {
    fetch::get_json(&create_order_url(repo, seller)).await
}

/// Confirm an authorized payment and trigger the repository transfer.
pub async fn confirm_order(
    authorization_id: &str,
    seller_id: &str,
    repo_url: &str,
    repo_name: &str,
) -> Result<MessageResponse, FetchError> {
    fetch::post_form(
        &format!("{}/confirm", BACKEND_URL),
        &[
            ("authorization_id", authorization_id),
            ("seller_id", seller_id),
            ("repo_url", repo_url),
            ("repo_name", repo_name),
        ],
    )
    .await
}
