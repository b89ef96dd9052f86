//! Marketplace page.
//!
//! Public listing browser with text search, a free/paid filter, and
//! sorting. Listing data comes from `/marketplace/repositories`.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::api;
use crate::models::{AppRoute, Repository};

stylance::import_crate_style!(css, "src/components/pages/marketplace.module.css");

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum PriceFilter {
    #[default]
    All,
    Free,
    Paid,
}

impl PriceFilter {
    fn from_value(value: &str) -> Self {
        match value {
            "free" => Self::Free,
            "paid" => Self::Paid,
            _ => Self::All,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum SortBy {
    #[default]
    Recent,
    PriceLow,
    PriceHigh,
    Name,
}

impl SortBy {
    fn from_value(value: &str) -> Self {
        match value {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "name" => Self::Name,
            _ => Self::Recent,
        }
    }
}

fn apply_filters(
    mut repos: Vec<Repository>,
    query: &str,
    price: PriceFilter,
    sort: SortBy,
) -> Vec<Repository> {
    let query = query.trim().to_lowercase();
    if !query.is_empty() {
        repos.retain(|repo| {
            repo.name.to_lowercase().contains(&query)
                || repo
                    .owner
                    .as_ref()
                    .is_some_and(|o| o.username.to_lowercase().contains(&query))
        });
    }

    match price {
        PriceFilter::All => {}
        PriceFilter::Free => repos.retain(Repository::is_free),
        PriceFilter::Paid => repos.retain(|repo| !repo.is_free()),
    }

    match sort {
        // Backend already returns newest first
        SortBy::Recent => {}
        SortBy::PriceLow => repos.sort_by(|a, b| {
            a.price
                .unwrap_or(0.0)
                .total_cmp(&b.price.unwrap_or(0.0))
        }),
        SortBy::PriceHigh => repos.sort_by(|a, b| {
            b.price
                .unwrap_or(0.0)
                .total_cmp(&a.price.unwrap_or(0.0))
        }),
        SortBy::Name => repos.sort_by(|a, b| a.name.cmp(&b.name)),
    }

    repos
}

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let listings = LocalResource::new(|| api::marketplace_repositories());

    let query = RwSignal::new(String::new());
    let price_filter = RwSignal::new(PriceFilter::All);
    let sort_by = RwSignal::new(SortBy::Recent);

    let filtered = Memo::new(move |_| {
        let repos = listings
            .get()
            .and_then(Result::ok)
            .unwrap_or_default();
        apply_filters(repos, &query.get(), price_filter.get(), sort_by.get())
    });

    view! {
        <div class=css::page>
            <header class=css::header>
                <a class=css::backLink href=AppRoute::Landing.to_hash()>
                    <Icon icon=ic::ARROW_LEFT />
                    "Home"
                </a>
                <h1 class=css::title>
                    <Icon icon=ic::CODE />
                    "Marketplace"
                </h1>
            </header>

            <div class=css::controls>
                <div class=css::searchBox>
                    <span class=css::searchIcon>
                        <Icon icon=ic::SEARCH />
                    </span>
                    <input
                        class=css::searchInput
                        type="text"
                        placeholder="Search repositories or sellers..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>

                <select
                    class=css::select
                    on:change=move |ev| price_filter.set(PriceFilter::from_value(&event_target_value(&ev)))
                >
                    <option value="all">"All prices"</option>
                    <option value="free">"Free"</option>
                    <option value="paid">"Paid"</option>
                </select>

                <select
                    class=css::select
                    on:change=move |ev| sort_by.set(SortBy::from_value(&event_target_value(&ev)))
                >
                    <option value="recent">"Most recent"</option>
                    <option value="price-low">"Price: low to high"</option>
                    <option value="price-high">"Price: high to low"</option>
                    <option value="name">"Name"</option>
                </select>
            </div>

            <Suspense fallback=move || {
                view! { <div class=css::loading>"Loading marketplace..."</div> }
            }>
                {move || {
                    listings
                        .get()
                        .map(|result| match result {
                            Err(_) => {
                                view! {
                                    <div class=css::errorState>
                                        "Could not load the listings. Try again later."
                                    </div>
                                }
                                    .into_any()
                            }
                            Ok(_) => {
                                view! {
                                    <div class=css::grid>
                                        <For
                                            each=move || filtered.get()
                                            key=|repo| repo.repository_id
                                            children=move |repo: Repository| {
                                                view! { <ListingCard repo=repo /> }
                                            }
                                        />
                                    </div>
                                    <Show when=move || filtered.get().is_empty()>
                                        <p class=css::emptyText>"No listings match your filters."</p>
                                    </Show>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ListingCard(repo: Repository) -> impl IntoView {
    let owner = repo.owner.clone();
    let view_route = owner.as_ref().map(|owner| AppRoute::Repository {
        owner: owner.username.clone(),
        repo: repo.name.clone(),
    });
    let branch = repo.branch.clone().unwrap_or_else(|| "main".to_string());
    let price_badge = if repo.is_free() {
        view! { <span class=css::freeBadge>"Free"</span> }.into_any()
    } else {
        view! {
            <span class=css::priceBadge>
                {format!("${:.2}", repo.price.unwrap_or(0.0))}
            </span>
        }
        .into_any()
    };

    view! {
        <div class=css::cardItem>
            <div class=css::cardHeader>
                <h3 class=css::cardName>{repo.name.clone()}</h3>
                {price_badge}
            </div>
            <div class=css::cardMeta>
                {owner
                    .map(|owner| {
                        view! {
                            <span class=css::metaEntry>
                                <Icon icon=ic::USER />
                                {owner.username}
                            </span>
                        }
                    })}
                <span class=css::metaEntry>
                    <Icon icon=ic::GIT_BRANCH />
                    {branch}
                </span>
            </div>
            {view_route
                .map(|route| {
                    view! {
                        <a class=css::viewButton href=route.to_hash()>
                            <Icon icon=ic::EYE />
                            "View repository"
                        </a>
                    }
                })}
        </div>
    }
}
