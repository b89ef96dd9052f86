//! Dashboard page.
//!
//! The session user's home: profile header, own listings (with delete),
//! repositories transferred in from purchases, and the GitHub import flow
//! for listing new repositories.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, SITE_URL};
use crate::core::{FetchError, api, auth};
use crate::models::{AppRoute, GitHubRepo, UserData};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/pages/dashboard.module.css");

#[component]
pub fn DashboardPage() -> impl IntoView {
    let user = LocalResource::new(|| api::get_user_info(None));

    // Kick back to login when the session is missing or expired
    Effect::new(move |_| {
        if let Some(Err(_)) = user.get() {
            AppRoute::Login.push();
        }
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
                <h1 class=css::brand>{APP_NAME}</h1>

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

                <button class=css::logoutButton on:click=move |_| auth::logout()>
                    <Icon icon=ic::LOG_OUT />
                    "Sign out"
                </button>
            </div>

            <div class=css::content>
                <Suspense fallback=move || {
                    view! { <div class=css::loading>"Loading..."</div> }
                }>
                    {move || {
                        user.get()
                            .map(|result| match result {
                                Ok(data) => view! { <DashboardBody data=data user=user /> }.into_any(),
                                Err(_) => {
                                    view! {
                                        <div class=css::loading>"Session expired. Redirecting..."</div>
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

#[component]
fn DashboardBody(
    data: UserData,
    user: LocalResource<Result<UserData, FetchError>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let toasts = ctx.toasts;

    let github_repos = RwSignal::new(Vec::<GitHubRepo>::new());
    let username = data.profile.username.clone();
    let email = data.profile.email.clone();
    let repositories = data.repositories.clone();
    let transferred = data.transfer_repository.clone();
    let listing_count = repositories.len();
    let transfer_count = transferred.len();

    let share_username = username.clone();
    let share_profile = move |_: leptos::ev::MouseEvent| {
        let url = format!("{}/#/dashboard/{}", SITE_URL, share_username);
        spawn_local(async move {
            if dom::copy_to_clipboard(&url).await {
                toasts.success("Link copied", "Profile link copied to the clipboard");
            } else {
                toasts.error("Error", "Could not copy the link");
            }
        });
    };

    let load_github = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            match api::github_repositories().await {
                Ok(repos) => github_repos.set(repos),
                Err(err) => toasts.error(
                    "Error",
                    &format!("Could not load GitHub repositories: {}", err),
                ),
            }
        });
    };

    let upload = move |repo: GitHubRepo| {
        spawn_local(async move {
            match api::upload_repository(&repo.name, &repo.url).await {
                Ok(()) => {
                    toasts.success("Success", "Repository listed");
                    github_repos.set(Vec::new());
                    user.refetch();
                }
                Err(err) => {
                    toasts.error("Error", &format!("Could not list the repository: {}", err))
                }
            }
        });
    };

    let delete = move |repository_id: u64| {
        if !dom::confirm("Delete this listing?") {
            return;
        }
        spawn_local(async move {
            match api::delete_repository(repository_id).await {
                Ok(()) => {
                    toasts.success("Success", "Listing removed");
                    user.refetch();
                }
                Err(err) => {
                    toasts.error("Error", &format!("Could not remove the listing: {}", err))
                }
            }
        });
    };

    let owner_for_rows = username.clone();

    view! {
        <div class=css::profileCard>
            <div class=css::profileInfo>
                <span class=css::avatar>
                    <Icon icon=ic::USER />
                </span>
                <div>
                    <h2 class=css::profileName>{username.clone()}</h2>
                    <p class=css::profileEmail>{email}</p>
                    <div class=css::badges>
                        <span class=css::badge>{format!("{} listings", listing_count)}</span>
                        <span class=css::badge>{format!("{} transferred", transfer_count)}</span>
                    </div>
                </div>
            </div>
            <button class=css::shareButton on:click=share_profile>
                <Icon icon=ic::SHARE />
                "Share profile"
            </button>
        </div>

        <div class=css::columns>
            <section class=css::card>
                <h3 class=css::cardTitle>
                    <Icon icon=ic::GITHUB />
                    "My listings"
                </h3>
                {if repositories.is_empty() {
                    view! { <p class=css::emptyText>"No listings yet."</p> }.into_any()
                } else {
                    repositories
                        .iter()
                        .map(|repo| {
                            let id = repo.repository_id;
                            let view_route = AppRoute::Repository {
                                owner: owner_for_rows.clone(),
                                repo: repo.name.clone(),
                            };
                            view! {
                                <div class=css::repoRow>
                                    <div class=css::repoInfo>
                                        <a class=css::repoName href=view_route.to_hash()>
                                            {repo.name.clone()}
                                        </a>
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
                                    <button
                                        class=css::deleteButton
                                        on:click=move |_| delete(id)
                                        aria-label="Delete listing"
                                    >
                                        <Icon icon=ic::TRASH />
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </section>

            <section class=css::card>
                <h3 class=css::cardTitle>
                    <Icon icon=ic::DOWNLOAD />
                    "Transferred repositories"
                </h3>
                {if transferred.is_empty() {
                    view! { <p class=css::emptyText>"No transfers yet."</p> }.into_any()
                } else {
                    transferred
                        .iter()
                        .map(|repo| {
                            view! {
                                <div class=css::repoRow>
                                    <div class=css::repoInfo>
                                        <span class=css::repoName>{repo.name.clone()}</span>
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
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </section>
        </div>

        <section class=css::card>
            <h3 class=css::cardTitle>
                <Icon icon=ic::UPLOAD />
                "List a repository"
            </h3>
            <button class=css::loadGithubButton on:click=load_github>
                <Icon icon=ic::GITHUB />
                "Load GitHub repositories"
            </button>

            <Show when=move || !github_repos.get().is_empty()>
                <h4 class=css::importTitle>"Your GitHub repositories"</h4>
                <For
                    each=move || github_repos.get()
                    key=|repo| repo.url.clone()
                    children=move |repo: GitHubRepo| {
                        let upload_repo = repo.clone();
                        view! {
                            <div class=css::repoRow>
                                <div class=css::repoInfo>
                                    <span class=css::repoName>{repo.name.clone()}</span>
                                    <span class=css::visibilityBadge>{repo.visibility.clone()}</span>
                                </div>
                                <button
                                    class=css::uploadButton
                                    on:click=move |_| upload(upload_repo.clone())
                                >
                                    <Icon icon=ic::UPLOAD />
                                    "List"
                                </button>
                            </div>
                        }
                    }
                />
            </Show>
        </section>
    }
}
