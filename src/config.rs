//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in headers and page titles.
pub const APP_NAME: &str = "Agora";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

/// Tagline displayed on the landing page.
pub const APP_TAGLINE: &str = "Code marketplace for developers, by developers";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the backend API. Every request carries the session cookies.
pub const BACKEND_URL: &str = "https://api.agoraports.dev";

/// Public URL of this client, used when building shareable profile links.
pub const SITE_URL: &str = "https://agoraports.dev";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10_000;

/// Branch requested when a listing does not declare one.
pub const DEFAULT_BRANCH: &str = "main";

// =============================================================================
// Session Cookies
// =============================================================================

/// Names of the session cookies issued by the backend.
pub mod cookies {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
}

// =============================================================================
// Timing
// =============================================================================

/// Delay constants for timer-driven UI transitions (milliseconds).
pub mod delays {
    /// Pause on the OAuth callback card before moving to the dashboard.
    pub const CALLBACK_REDIRECT_MS: u32 = 2_000;
    /// Pause after a free acquisition succeeds before moving to the dashboard.
    pub const PURCHASE_REDIRECT_MS: u32 = 2_000;
    /// How long a toast stays on screen.
    pub const TOAST_DISMISS_MS: u32 = 4_000;
    /// Delay before the first line of the landing terminal demo.
    pub const TERMINAL_FIRST_LINE_MS: u32 = 1_000;
    /// Delay between subsequent lines of the landing terminal demo.
    pub const TERMINAL_LINE_MS: u32 = 800;
}
