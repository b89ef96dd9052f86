//! Public profile page.
//!
//! Read-only view of another user's listings, reached from the dashboard
//! search or a shared link. Purchasing happens in the repository viewer.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::api;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/profile.module.css");

#[component]
pub fn ProfilePage(username: String) -> impl IntoView {
    let username = StoredValue::new(username);
    let user = LocalResource::new(move || {
        let username = username.get_value();
        async move { api::get_user_info(Some(&username)).await }
    });

    let search = RwSignal::new(String::new());
    let run_search = move || {
        let value = search.get_untracked();
        let value = value.trim();
        if !value.is_empty() {
            AppRoute::Profile {
                username: value.to_string(),
            }
            .push();
        }
    };

    view! {
        <div class=css::page>
            <div class=css::topBar>
                <a class=css::backLink href=AppRoute::Dashboard.to_hash()>
                    <Icon icon=ic::ARROW_LEFT />
                    "My dashboard"
                </a>

                <div class=css::searchBox>
                    <span class=css::searchIcon>
                        <Icon icon=ic::SEARCH />
                    </span>
                    <input
                        class=css::searchInput
                        type="text"
                        placeholder="Search user..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                run_search();
                            }
                        }
                    />
                    <button class=css::searchButton on:click=move |_| run_search()>
                        "Search"
                    </button>
                </div>
            </div>

            <div class=css::content>
                <Suspense fallback=move || {
                    view! { <div class=css::loading>"Loading profile..."</div> }
                }>
                    {move || {
                        user.get()
                            .map(|result| match result {
                                Ok(data) => {
                                    let owner = data.profile.username.clone();
                                    let listings = data.repositories.clone();
                                    view! {
                                        <div class=css::profileCard>
                                            <span class=css::avatar>
                                                <Icon icon=ic::USER />
                                            </span>
                                            <div>
                                                <h2 class=css::profileName>
                                                    {data.profile.username.clone()}
                                                </h2>
                                                <span class=css::badge>
                                                    {format!("{} listings", listings.len())}
                                                </span>
                                            </div>
                                        </div>

                                        <section class=css::card>
                                            <h3 class=css::cardTitle>
                                                <Icon icon=ic::GITHUB />
                                                "Listings"
                                            </h3>
                                            {if listings.is_empty() {
                                                view! {
                                                    <p class=css::emptyText>
                                                        "This user has no listings."
                                                    </p>
                                                }
                                                    .into_any()
                                            } else {
                                                listings
                                                    .iter()
                                                    .map(|repo| {
                                                        let route = AppRoute::Repository {
                                                            owner: owner.clone(),
                                                            repo: repo.name.clone(),
                                                        };
                                                        view! {
                                                            <div class=css::repoRow>
                                                                <div class=css::repoInfo>
                                                                    <span class=css::repoName>
                                                                        {repo.name.clone()}
                                                                    </span>
                                                                    <a
                                                                        class=css::repoUrl
                                                                        href=repo.url.clone()
                                                                        target="_blank"
                                                                        rel="noopener noreferrer"
                                                                    >
                                                                        <Icon icon=ic::EXTERNAL_LINK />
                                                                        {repo.url.clone()}
                                                                    </a>
                                                                </div>
                                                                <a
                                                                    class=css::viewButton
                                                                    href=route.to_hash()
                                                                >
                                                                    <Icon icon=ic::EYE />
                                                                    "View"
                                                                </a>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()
                                                    .into_any()
                                            }}
                                        </section>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    let (title, text) = if err.status() == Some(404) {
                                        ("User not found", "No profile exists for that username.".to_string())
                                    } else {
                                        ("Could not load the profile", err.to_string())
                                    };
                                    view! {
                                        <div class=css::errorCard>
                                            <h2 class=css::errorTitle>{title}</h2>
                                            <p class=css::errorText>{text}</p>
                                            <a class=css::viewButton href=AppRoute::Dashboard.to_hash()>
                                                "Back to dashboard"
                                            </a>
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
