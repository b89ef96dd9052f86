//! Login page.
//!
//! Authentication itself is the backend's GitHub OAuth flow; this page only
//! hands the whole window over to it.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::core::auth;
use crate::models::AppRoute;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/pages/login.module.css");

#[component]
pub fn LoginPage() -> impl IntoView {
    // Skip the login card entirely when the session is still good
    if auth::is_authenticated() {
        spawn_local(async move {
            if auth::verify_session().await && AppRoute::current() == AppRoute::Login {
                AppRoute::Dashboard.push();
            }
        });
    }

    let handle_login = move |_: leptos::ev::MouseEvent| {
        dom::navigate_to(&auth::login_url());
    };

    view! {
        <div class=css::page>
            <div class=css::card>
                <h1 class=css::title>"Sign in"</h1>
                <p class=css::subtitle>"Access your account with GitHub"</p>

                <span class=css::githubMark>
                    <Icon icon=ic::GITHUB />
                </span>
                <p class=css::hint>"Use your GitHub account to sign in securely."</p>

                <button class=css::loginButton on:click=handle_login>
                    <Icon icon=ic::GITHUB />
                    "Continue with GitHub"
                </button>

                <p class=css::terms>
                    "By continuing you accept our terms of service and privacy policy."
                </p>
            </div>
        </div>
    }
}
