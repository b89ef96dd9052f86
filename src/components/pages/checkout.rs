//! Checkout outcome pages.
//!
//! The payment processor redirects back to one of these routes after the
//! user approves, cancels, or fails a payment. [`SuccessPage`] finalizes
//! the purchase by posting the authorization to `/confirm`, which also
//! triggers the repository transfer.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::api;
use crate::models::{AppRoute, CheckoutQuery};

stylance::import_crate_style!(css, "src/components/pages/checkout.module.css");

#[derive(Clone, Debug, PartialEq)]
enum ConfirmState {
    /// Parameters incomplete or not yet examined.
    Waiting,
    Processing,
    Completed { repo_name: String },
    Failed(String),
}

#[component]
pub fn SuccessPage(query: CheckoutQuery) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let toasts = ctx.toasts;
    let state = RwSignal::new(ConfirmState::Waiting);

    if let Some(error) = query.error.clone() {
        state.set(ConfirmState::Failed(error));
    } else if query.is_complete() {
        state.set(ConfirmState::Processing);
        spawn_local(async move {
            let authorization_id = query.authorization_id.clone().unwrap_or_default();
            let seller_id = query.seller_id.clone().unwrap_or_default();
            let repo_url = query.repo_url.clone().unwrap_or_default();
            let repo_name = query.repo_name.clone().unwrap_or_default();

            match api::confirm_order(&authorization_id, &seller_id, &repo_url, &repo_name).await {
                Ok(_) => {
                    toasts.success("Payment complete", "The repository was transferred to your account");
                    let _ = state.try_set(ConfirmState::Completed { repo_name });
                }
                Err(err) => {
                    toasts.error("Error", "The transaction could not be completed");
                    let _ = state.try_set(ConfirmState::Failed(err.to_string()));
                }
            }
        });
    }

    view! {
        <div class=css::page>
            {move || match state.get() {
                ConfirmState::Waiting => {
                    view! {
                        <div class=css::card>
                            <span class=css::iconCircleBlue>
                                <span class=css::spinner><Icon icon=ic::LOADER /></span>
                            </span>
                            <h1 class=css::title>"Loading..."</h1>
                            <p class=css::subtitle>"Reading payment information"</p>
                        </div>
                    }
                        .into_any()
                }
                ConfirmState::Processing => {
                    view! {
                        <div class=css::card>
                            <span class=css::iconCircleBlue>
                                <span class=css::spinner><Icon icon=ic::LOADER /></span>
                            </span>
                            <h1 class=css::title>"Processing payment"</h1>
                            <p class=css::subtitle>
                                "Confirming the transaction and transferring the repository..."
                            </p>
                            <ul class=css::steps>
                                <li>"Verifying the payment"</li>
                                <li>"Cloning the repository"</li>
                                <li>"Transferring it to your account"</li>
                            </ul>
                        </div>
                    }
                        .into_any()
                }
                ConfirmState::Completed { repo_name } => {
                    view! {
                        <div class=css::card>
                            <span class=css::iconCircleGreen>
                                <Icon icon=ic::CHECK_CIRCLE />
                            </span>
                            <h1 class=css::title>"Purchase complete"</h1>
                            <p class=css::subtitle>
                                {format!(
                                    "The repository \"{}\" was transferred to your GitHub account.",
                                    repo_name,
                                )}
                            </p>
                            <div class=css::nextBox>
                                <h3 class=css::nextTitle>"What now?"</h3>
                                <ul class=css::nextList>
                                    <li>"The repository is already in your GitHub account"</li>
                                    <li>"Clone it and start working"</li>
                                    <li>"Check your dashboard for the details"</li>
                                </ul>
                            </div>
                            <a class=css::primaryButton href=AppRoute::Dashboard.to_hash()>
                                "Go to dashboard"
                            </a>
                        </div>
                    }
                        .into_any()
                }
                ConfirmState::Failed(message) => {
                    view! {
                        <div class=css::card>
                            <span class=css::iconCircleRed>
                                <Icon icon=ic::CROSS_CIRCLE />
                            </span>
                            <h1 class=css::title>"Payment failed"</h1>
                            <p class=css::subtitle>{message}</p>
                            <a class=css::primaryButton href=AppRoute::Dashboard.to_hash()>
                                "Back to dashboard"
                            </a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn CancelPage() -> impl IntoView {
    view! {
        <div class=css::page>
            <div class=css::card>
                <span class=css::iconCircleOrange>
                    <Icon icon=ic::CROSS_CIRCLE />
                </span>
                <h1 class=css::title>"Payment cancelled"</h1>
                <p class=css::subtitle>
                    "You cancelled the payment. Nothing was charged."
                </p>
                <div class=css::nextBox>
                    <h3 class=css::nextTitle>"What happened?"</h3>
                    <ul class=css::nextList>
                        <li>"The payment was cancelled before completion"</li>
                        <li>"No charge was made"</li>
                        <li>"You can try again whenever you like"</li>
                    </ul>
                </div>
                <div class=css::buttonRow>
                    <a class=css::primaryButton href=AppRoute::Dashboard.to_hash()>
                        "Go to dashboard"
                    </a>
                    <a class=css::secondaryButton href=AppRoute::Landing.to_hash()>
                        "Home"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn PaymentErrorPage(message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| "An unknown error occurred.".to_string());

    view! {
        <div class=css::page>
            <div class=css::card>
                <span class=css::iconCircleRed>
                    <Icon icon=ic::WARNING />
                </span>
                <h1 class=css::title>"A payment error occurred"</h1>
                <p class=css::subtitle>{message}</p>
                <a class=css::primaryButton href=AppRoute::Dashboard.to_hash()>
                    "Back to dashboard"
                </a>
            </div>
        </div>
    }
}
