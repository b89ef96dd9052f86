//! Landing page.
//!
//! Public hero page with a timer-driven terminal demo and entry points into
//! login and the marketplace.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE, APP_VERSION, delays};
use crate::core::auth;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/landing.module.css");

/// Lines typed into the demo terminal, one per tick.
const TERMINAL_SCRIPT: &[&str] = &[
    "$ git clone https://github.com/dev/awesome-project.git",
    "Cloning into 'awesome-project'...",
    "remote: Enumerating objects: 156, done.",
    "remote: Total 156 (delta 0), reused 0 (delta 0)",
    "Receiving objects: 100% (156/156), 2.4 MiB | 1.2 MiB/s, done.",
    "$ cd awesome-project",
    "$ npm install",
    "Installing dependencies...",
    "Project ready. Time to build something amazing.",
];

const STATS: &[(&str, &str)] = &[
    ("Repositories", "1,247"),
    ("Developers", "892"),
    ("Transactions", "$12.4k"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    // Number of demo lines currently revealed
    let shown = RwSignal::new(0usize);

    spawn_local(async move {
        TimeoutFuture::new(delays::TERMINAL_FIRST_LINE_MS).await;
        for count in 1..=TERMINAL_SCRIPT.len() {
            // try_set fails once the page unmounts; stop typing then
            if shown.try_set(count).is_some() {
                break;
            }
            TimeoutFuture::new(delays::TERMINAL_LINE_MS).await;
        }
    });

    view! {
        <div class=css::page>
            <div class=css::warningBanner>
                <Icon icon=ic::WARNING />
                <span>"[BETA] Side project - no official payment partner integration"</span>
            </div>

            <header class=css::header>
                <div class=css::brand>
                    <span class=css::brandMark><Icon icon=ic::CODE /></span>
                    <span class=css::brandName>{APP_NAME}</span>
                </div>
                <nav class=css::nav>
                    <a class=css::navLink href=AppRoute::Marketplace.to_hash()>"./marketplace"</a>
                    {if auth::is_authenticated() {
                        view! {
                            <a class=css::navLink href=AppRoute::Dashboard.to_hash()>"./dashboard"</a>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a class=css::navLink href=AppRoute::Login.to_hash()>"./login"</a>
                        }
                            .into_any()
                    }}
                </nav>
            </header>

            <section class=css::hero>
                <div class=css::heroText>
                    <span class=css::badge>
                        {format!("v{}-beta | Open source marketplace", APP_VERSION)}
                    </span>
                    <h1 class=css::title>
                        <span class=css::titleLine>"CODE"</span>
                        <span class=css::titleAccent>"MARKETPLACE"</span>
                        <span class=css::titleSub>"for developers, by developers"</span>
                    </h1>
                    <p class=css::tagline>{APP_TAGLINE}</p>
                    <p class=css::pitch>
                        "Buy unique repositories. Sell your code. GitHub integration \
                         and secure payments, with automatic ownership transfer."
                    </p>

                    <div class=css::actions>
                        <a class=css::primaryAction href=AppRoute::Login.to_hash()>
                            <Icon icon=ic::GITHUB />
                            "Get started"
                        </a>
                        <a class=css::secondaryAction href=AppRoute::Marketplace.to_hash()>
                            <Icon icon=ic::EYE />
                            "Browse marketplace"
                        </a>
                    </div>

                    <div class=css::stats>
                        {STATS
                            .iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class=css::stat>
                                        <span class=css::statValue>{*value}</span>
                                        <span class=css::statLabel>{*label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class=css::terminal>
                    <div class=css::terminalBar>
                        <Icon icon=ic::TERMINAL />
                        <span>"demo"</span>
                    </div>
                    <pre class=css::terminalBody>
                        {move || {
                            TERMINAL_SCRIPT[..shown.get().min(TERMINAL_SCRIPT.len())].join("\n")
                        }}
                        <span class=css::cursor>"_"</span>
                    </pre>
                </div>
            </section>
        </div>
    }
}
