//! OAuth callback interstitial.
//!
//! The backend lands the browser here after GitHub login with the session
//! cookies already set; a short timer then moves on to the dashboard.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::config::delays;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/callback.module.css");

#[component]
pub fn CallbackPage() -> impl IntoView {
    spawn_local(async move {
        TimeoutFuture::new(delays::CALLBACK_REDIRECT_MS).await;
        // Only redirect if the user is still sitting on the callback page
        if AppRoute::current() == AppRoute::Callback {
            AppRoute::Dashboard.push();
        }
    });

    view! {
        <div class=css::page>
            <div class=css::card>
                <span class=css::checkMark>
                    <Icon icon=ic::CHECK_CIRCLE />
                </span>
                <h1 class=css::title>"Authentication successful"</h1>
                <p class=css::subtitle>"Redirecting to your dashboard..."</p>
                <div class=css::loading>
                    <span class=css::spinner><Icon icon=ic::LOADER /></span>
                    <span>"Loading..."</span>
                </div>
            </div>
        </div>
    }
}
