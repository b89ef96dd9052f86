//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native hashchange
//! events instead of leptos_router so the client works from any static
//! host without rewrites, and browser back/forward buttons work
//! automatically.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::pages::{
    CallbackPage, CancelPage, DashboardPage, LandingPage, LoginPage, MarketplacePage,
    PaymentErrorPage, ProfilePage, RepositoryPage, SuccessPage,
};
use crate::models::AppRoute;

/// Main application router.
///
/// The URL hash is the source of truth; each hash change swaps the mounted
/// page. A route change into `Repository` therefore mounts a fresh viewer
/// (and a fresh content cache) for that `(owner, repo)` pair, and discards
/// it on the way out.
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    view! {
        {move || match route_memo.get() {
            AppRoute::Landing => view! { <LandingPage /> }.into_any(),
            AppRoute::Login => view! { <LoginPage /> }.into_any(),
            AppRoute::Callback => view! { <CallbackPage /> }.into_any(),
            AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
            AppRoute::Profile { username } => {
                view! { <ProfilePage username=username /> }.into_any()
            }
            AppRoute::Marketplace => view! { <MarketplacePage /> }.into_any(),
            AppRoute::Repository { owner, repo } => {
                view! { <RepositoryPage owner=owner repo=repo /> }.into_any()
            }
            AppRoute::Success { query } => view! { <SuccessPage query=query /> }.into_any(),
            AppRoute::Cancel => view! { <CancelPage /> }.into_any(),
            AppRoute::PaymentError { message } => {
                view! { <PaymentErrorPage message=message /> }.into_any()
            }
        }}
    }
}
