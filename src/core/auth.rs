//! Session-status collaborator.
//!
//! The only place that inspects or clears the backend's session cookies.
//! Pages consume `is_authenticated`/`logout` instead of touching
//! `document.cookie` themselves.

use crate::config::{BACKEND_URL, cookies};
use crate::models::AppRoute;
use crate::utils::{dom, fetch};

/// Both session cookies are present. A cheap local check; the backend still
/// validates them on every request.
pub fn is_authenticated() -> bool {
    let jar = dom::cookies();
    jar.contains(cookies::ACCESS_TOKEN) && jar.contains(cookies::REFRESH_TOKEN)
}

/// Ask the backend whether the session cookies are still good.
pub async fn verify_session() -> bool {
    fetch::get_ok(&format!("{}/home", BACKEND_URL)).await.is_ok()
}

/// Entry point of the backend's GitHub OAuth flow. Navigated to with the
/// whole window, not fetched.
pub fn login_url() -> String {
    format!("{}/auth/github/login", BACKEND_URL)
}

/// Drop the session cookies and return to the landing page.
pub fn logout() {
    for name in [cookies::ACCESS_TOKEN, cookies::REFRESH_TOKEN] {
        dom::set_cookie(&format!(
            "{}=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/;",
            name
        ));
    }
    AppRoute::Landing.push();
}
