//! Hash-based routing.
//!
//! Navigation state is derived from the URL hash (`#/path`), so the client
//! works from any static host without server-side rewrites. Browser
//! back/forward buttons work through `hashchange` events.

use crate::utils::url::{percent_decode, percent_encode, query_pairs};

/// Query parameters carried back from the payment processor redirect.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckoutQuery {
    pub authorization_id: Option<String>,
    pub seller_id: Option<String>,
    pub repo_url: Option<String>,
    pub repo_name: Option<String>,
    pub error: Option<String>,
}

impl CheckoutQuery {
    fn from_query(query: &str) -> Self {
        let mut out = Self::default();
        for (key, value) in query_pairs(query) {
            match key.as_str() {
                "authorization_id" => out.authorization_id = Some(value),
                "seller_id" => out.seller_id = Some(value),
                "repo_url" => out.repo_url = Some(value),
                "repo_name" => out.repo_name = Some(value),
                "error" => out.error = Some(value),
                _ => {}
            }
        }
        out
    }

    fn to_query(&self) -> String {
        let mut parts = Vec::new();
        for (key, value) in [
            ("authorization_id", &self.authorization_id),
            ("seller_id", &self.seller_id),
            ("repo_url", &self.repo_url),
            ("repo_name", &self.repo_name),
            ("error", &self.error),
        ] {
            if let Some(value) = value {
                parts.push(format!("{}={}", key, percent_encode(value)));
            }
        }
        parts.join("&")
    }

    /// All parameters required to confirm a payment are present.
    pub fn is_complete(&self) -> bool {
        self.authorization_id.is_some()
            && self.seller_id.is_some()
            && self.repo_url.is_some()
            && self.repo_name.is_some()
    }
}

/// Application routes for hash-based navigation.
#[derive(Clone, Debug, PartialEq)]
pub enum AppRoute {
    /// Landing page: `#/` or empty hash.
    Landing,
    /// Login card: `#/login`.
    Login,
    /// OAuth callback interstitial: `#/callback`.
    Callback,
    /// Own dashboard: `#/dashboard`.
    Dashboard,
    /// Public profile: `#/dashboard/{username}`.
    Profile { username: String },
    /// Public listings: `#/marketplace`.
    Marketplace,
    /// Repository viewer: `#/repository/{owner}/{repo}`.
    Repository { owner: String, repo: String },
    /// Payment processor success redirect: `#/success?...`.
    Success { query: CheckoutQuery },
    /// Payment cancelled by the user: `#/cancel`.
    Cancel,
    /// Payment processor error redirect: `#/error?message=...`.
    PaymentError { message: Option<String> },
}

impl AppRoute {
    /// Parse a URL hash into a route. Unknown paths fall back to the landing
    /// page.
    pub fn from_hash(hash: &str) -> Self {
        let raw = hash.trim_start_matches('#').trim_start_matches('/');
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, query),
            None => (raw, ""),
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Landing,
            ["login"] => Self::Login,
            ["callback"] => Self::Callback,
            ["dashboard"] => Self::Dashboard,
            ["dashboard", username] => Self::Profile {
                username: percent_decode(username),
            },
            ["marketplace"] => Self::Marketplace,
            ["repository", owner, repo] => Self::Repository {
                owner: percent_decode(owner),
                repo: percent_decode(repo),
            },
            ["success"] => Self::Success {
                query: CheckoutQuery::from_query(query),
            },
            ["cancel"] => Self::Cancel,
            ["error"] => Self::PaymentError {
                message: query_pairs(query)
                    .into_iter()
                    .find(|(key, _)| key == "message")
                    .map(|(_, value)| value),
            },
            _ => Self::Landing,
        }
    }

    /// Convert the route back to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Landing => "#/".to_string(),
            Self::Login => "#/login".to_string(),
            Self::Callback => "#/callback".to_string(),
            Self::Dashboard => "#/dashboard".to_string(),
            Self::Profile { username } => format!("#/dashboard/{}", percent_encode(username)),
            Self::Marketplace => "#/marketplace".to_string(),
            Self::Repository { owner, repo } => {
                format!("#/repository/{}/{}", percent_encode(owner), percent_encode(repo))
            }
            Self::Success { query } => {
                let qs = query.to_query();
                if qs.is_empty() {
                    "#/success".to_string()
                } else {
                    format!("#/success?{}", qs)
                }
            }
            Self::Cancel => "#/cancel".to_string(),
            Self::PaymentError { message } => match message {
                Some(message) => format!("#/error?message={}", percent_encode(message)),
                None => "#/error".to_string(),
            },
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route. Setting the hash fires `hashchange`, which the
    /// router listens on, and adds a history entry.
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Landing);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Landing);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Landing);
        assert_eq!(AppRoute::from_hash("#/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_hash("#/dashboard"), AppRoute::Dashboard);
        assert_eq!(
            AppRoute::from_hash("#/dashboard/mona"),
            AppRoute::Profile {
                username: "mona".to_string(),
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/repository/mona/demo-app"),
            AppRoute::Repository {
                owner: "mona".to_string(),
                repo: "demo-app".to_string(),
            }
        );
        // Unknown paths fall back to the landing page
        assert_eq!(AppRoute::from_hash("#/nope/nope/nope/nope"), AppRoute::Landing);
    }

    #[test]
    fn test_success_query_parsing() {
        let route = AppRoute::from_hash(
            "#/success?authorization_id=AUTH-1&seller_id=42&repo_url=https%3A%2F%2Fgithub.com%2Fmona%2Fdemo&repo_name=demo",
        );
        match route {
            AppRoute::Success { query } => {
                assert!(query.is_complete());
                assert_eq!(query.authorization_id.as_deref(), Some("AUTH-1"));
                assert_eq!(query.seller_id.as_deref(), Some("42"));
                assert_eq!(
                    query.repo_url.as_deref(),
                    Some("https://github.com/mona/demo")
                );
                assert_eq!(query.repo_name.as_deref(), Some("demo"));
                assert_eq!(query.error, None);
            }
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[test]
    fn test_success_error_param() {
        let route = AppRoute::from_hash("#/success?error=payment%20declined");
        match route {
            AppRoute::Success { query } => {
                assert!(!query.is_complete());
                assert_eq!(query.error.as_deref(), Some("payment declined"));
            }
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[test]
    fn test_payment_error_message() {
        assert_eq!(
            AppRoute::from_hash("#/error?message=capture%20failed"),
            AppRoute::PaymentError {
                message: Some("capture failed".to_string()),
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/error"),
            AppRoute::PaymentError { message: None }
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Landing.to_hash(), "#/");
        assert_eq!(AppRoute::Marketplace.to_hash(), "#/marketplace");
        assert_eq!(
            AppRoute::Repository {
                owner: "mona".to_string(),
                repo: "demo".to_string(),
            }
            .to_hash(),
            "#/repository/mona/demo"
        );
        assert_eq!(
            AppRoute::PaymentError {
                message: Some("capture failed".to_string()),
            }
            .to_hash(),
            "#/error?message=capture%20failed"
        );
    }

    #[test]
    fn test_round_trip() {
        let routes = [
            AppRoute::Landing,
            AppRoute::Login,
            AppRoute::Callback,
            AppRoute::Dashboard,
            AppRoute::Profile {
                username: "mona lisa".to_string(),
            },
            AppRoute::Cancel,
            AppRoute::Success {
                query: CheckoutQuery {
                    authorization_id: Some("AUTH-1".to_string()),
                    seller_id: Some("42".to_string()),
                    repo_url: Some("https://github.com/mona/demo".to_string()),
                    repo_name: Some("demo".to_string()),
                    error: None,
                },
            },
        ];
        for route in routes {
            assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
        }
    }
}
