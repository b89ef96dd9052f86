//! Repository viewer page.
//!
//! Shows a listed repository's metadata, its file tree, and a lazily
//! fetched code preview, plus the purchase flow for non-owners. The viewer
//! state (selection, expansion, content cache) lives for exactly as long as
//! this page is mounted for one `(owner, repo)` pair.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::viewer::{CodePane, FileTreePanel};
use crate::config::{DEFAULT_BRANCH, delays};
use crate::core::api;
use crate::core::tree::FileTree;
use crate::core::viewer::{OpenOutcome, ViewerState};
use crate::models::{AppRoute, EntryKind, Profile, Repository};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/pages/repository.module.css");

#[component]
pub fn RepositoryPage(owner: String, repo: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let toasts = ctx.toasts;

    let owner = StoredValue::new(owner);
    let repo = StoredValue::new(repo);

    // One viewer, and therefore one content cache, per mounted view
    let viewer = RwSignal::new(ViewerState::new());
    let tree = RwSignal::new(FileTree::default());
    let truncated = RwSignal::new(false);
    let repository = RwSignal::new(None::<Repository>);
    let seller = RwSignal::new(None::<Profile>);
    let current_user = RwSignal::new(None::<Profile>);
    let loading = RwSignal::new(true);
    let purchasing = RwSignal::new(false);

    let open_file = move |path: String| {
        let outcome = viewer.try_update(|v| v.open_file(&path));
        if outcome == Some(OpenOutcome::Fetch) {
            spawn_local(async move {
                let result =
                    api::file_content(&owner.get_value(), &repo.get_value(), &path).await;
                if let Err(err) = &result {
                    web_sys::console::warn_1(
                        &format!("file fetch failed for {}: {}", path, err).into(),
                    );
                }
                let _ = viewer.try_update(|v| v.finish_load(&path, result));
            });
        }
    };

    // Initial load: seller profile, listing metadata, then the tree
    spawn_local(async move {
        let owner_name = owner.get_value();
        let repo_name = repo.get_value();

        let mut branch = DEFAULT_BRANCH.to_string();
        match api::get_user_info(Some(&owner_name)).await {
            Ok(data) => {
                let found = data
                    .repositories
                    .iter()
                    .find(|r| r.name == repo_name)
                    .cloned();
                if let Some(listing) = &found
                    && let Some(listed_branch) = &listing.branch
                {
                    branch = listed_branch.clone();
                }
                let _ = seller.try_set(Some(data.profile));
                let _ = repository.try_set(found);
            }
            Err(err) => {
                toasts.error("Error", &format!("Could not load repository info: {}", err));
            }
        }

        match api::repo_tree(&owner_name, &repo_name, &branch).await {
            Ok(response) => {
                // Auto-open the most README-looking file
                let auto_open = response
                    .tree
                    .iter()
                    .find(|entry| {
                        let path = entry.path.to_lowercase();
                        entry.kind == EntryKind::File
                            && (path.contains("readme") || path.contains("index"))
                    })
                    .map(|entry| entry.path.clone());

                let _ = truncated.try_set(response.truncated);
                let _ = tree.try_set(FileTree::build(&response.tree));
                if let Some(path) = auto_open {
                    open_file(path);
                }
            }
            Err(err) => {
                // An empty tree is indistinguishable from an empty repository
                web_sys::console::warn_1(&format!("tree fetch failed: {}", err).into());
            }
        }

        let _ = loading.try_set(false);
    });

    // Session user, for hiding the purchase flow on own listings
    spawn_local(async move {
        if let Ok(data) = api::get_user_info(None).await {
            let _ = current_user.try_set(Some(data.profile));
        }
    });

    let is_owner = Signal::derive(move || {
        match (current_user.get(), seller.get()) {
            (Some(me), Some(seller)) => me.id == seller.id,
            _ => false,
        }
    });

    let purchase = move |_: leptos::ev::MouseEvent| {
        let (Some(listing), Some(seller_profile)) =
            (repository.get_untracked(), seller.get_untracked())
        else {
            return;
        };
        if purchasing.get_untracked() {
            return;
        }
        purchasing.set(true);

        if listing.is_free() {
            spawn_local(async move {
                match api::acquire_free(&listing, &seller_profile).await {
                    Ok(response) => {
                        toasts.success(
                            "Success",
                            response.message.as_deref().unwrap_or("Repository acquired"),
                        );
                        TimeoutFuture::new(delays::PURCHASE_REDIRECT_MS).await;
                        AppRoute::Dashboard.push();
                    }
                    Err(err) => {
                        toasts.error("Error", &format!("Could not complete the purchase: {}", err));
                    }
                }
                let _ = purchasing.try_set(false);
            });
        } else {
            // Priced listing: hand the whole window to the payment processor
            dom::navigate_to(&api::create_order_url(&listing, &seller_profile));
        }
    };

    view! {
        <div class=css::page>
            {move || {
                if loading.get() {
                    return view! {
                        <div class=css::centered>
                            <span class=css::spinner><Icon icon=ic::LOADER /></span>
                            <span>"Loading repository..."</span>
                        </div>
                    }
                        .into_any();
                }
                let (Some(listing), Some(seller_profile)) = (repository.get(), seller.get())
                else {
                    return view! {
                        <div class=css::centered>
                            <div class=css::notFoundCard>
                                <h1 class=css::notFoundTitle>"Repository not found"</h1>
                                <a class=css::backButton href=AppRoute::Dashboard.to_hash()>
                                    "Back to dashboard"
                                </a>
                            </div>
                        </div>
                    }
                        .into_any();
                };
                view! {
                    <RepositoryView
                        listing=listing
                        seller=seller_profile
                        tree=tree
                        truncated=truncated.get()
                        viewer=viewer
                        is_owner=is_owner
                        purchasing=purchasing
                        on_open=Callback::new(open_file)
                        on_purchase=purchase
                    />
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn RepositoryView(
    listing: Repository,
    seller: Profile,
    tree: RwSignal<FileTree>,
    truncated: bool,
    viewer: RwSignal<ViewerState>,
    is_owner: Signal<bool>,
    purchasing: RwSignal<bool>,
    on_open: Callback<String>,
    on_purchase: impl Fn(leptos::ev::MouseEvent) + Copy + 'static + Send + Sync,
) -> impl IntoView {
    let title = format!("{}/{}", seller.username, listing.name);
    let branch = listing
        .branch
        .clone()
        .unwrap_or_else(|| DEFAULT_BRANCH.to_string());
    let price = listing.price.filter(|p| *p > 0.0);
    let repo_url = listing.url.clone();
    let seller_name = seller.username.clone();

    let purchase_label = move || {
        if purchasing.get() {
            view! {
                <span class=css::buttonSpinner><Icon icon=ic::LOADER /></span>
                "Processing..."
            }
            .into_any()
        } else if let Some(price) = price {
            view! {
                <Icon icon=ic::DOLLAR />
                {format!("Buy ${}", price)}
            }
            .into_any()
        } else {
            view! {
                <Icon icon=ic::DOWNLOAD />
                "Get for free"
            }
            .into_any()
        }
    };

    view! {
        <header class=css::header>
            <div class=css::headerLeft>
                <a class=css::backButton href=AppRoute::Dashboard.to_hash()>
                    <Icon icon=ic::ARROW_LEFT />
                    "Back"
                </a>
                <span class=css::headerTitle>
                    <Icon icon=ic::CODE />
                    {title}
                </span>
            </div>
            <Show when=move || !is_owner.get()>
                <button
                    class=css::purchaseButton
                    on:click=on_purchase
                    disabled=move || purchasing.get()
                >
                    {purchase_label}
                </button>
            </Show>
        </header>

        <div class=css::content>
            <div class=css::infoCard>
                <div class=css::infoMain>
                    <h2 class=css::repoName>
                        <Icon icon=ic::GITHUB />
                        {listing.name.clone()}
                    </h2>
                    <div class=css::infoMeta>
                        <span class=css::metaEntry>
                            <Icon icon=ic::USER />
                            {seller_name}
                        </span>
                        <span class=css::metaEntry>
                            <Icon icon=ic::GIT_BRANCH />
                            {branch}
                        </span>
                        <a
                            class=css::githubLink
                            href=repo_url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <Icon icon=ic::GITHUB />
                            "View on GitHub"
                        </a>
                    </div>
                    {truncated
                        .then(|| {
                            view! {
                                <p class=css::truncatedNote>
                                    "Large repository: the file list was truncated by the backend."
                                </p>
                            }
                        })}
                </div>
                <div class=css::infoBadges>
                    {match price {
                        Some(price) => {
                            view! {
                                <span class=css::priceBadge>{format!("${}", price)}</span>
                            }
                                .into_any()
                        }
                        None => view! { <span class=css::freeBadge>"Free"</span> }.into_any(),
                    }}
                    <span class=css::previewBadge>
                        <Icon icon=ic::EYE />
                        "Preview"
                    </span>
                </div>
            </div>

            <div class=css::explorer>
                <FileTreePanel tree=tree.into() viewer=viewer on_open=on_open />
                <CodePane viewer=viewer />
            </div>

            <Show when=move || !is_owner.get()>
                <div class=css::purchaseCard>
                    <div>
                        <h3 class=css::purchaseTitle>
                            {if price.is_some() { "Buy repository" } else { "Get repository" }}
                        </h3>
                        <p class=css::purchaseText>
                            {match price {
                                Some(price) => {
                                    format!("Get full access to this repository for ${}.", price)
                                }
                                None => "This repository is free. Get it now.".to_string(),
                            }}
                        </p>
                        <ul class=css::perks>
                            <li>"Automatic transfer to your GitHub account"</li>
                            <li>"Full access to the code"</li>
                            <li>"Commit history included"</li>
                        </ul>
                    </div>
                    <button
                        class=css::purchaseButton
                        on:click=on_purchase
                        disabled=move || purchasing.get()
                    >
                        {purchase_label}
                    </button>
                </div>
            </Show>
        </div>
    }
}
