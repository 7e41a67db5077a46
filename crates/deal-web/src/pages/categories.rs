use chrono::Utc;
use deal_commerce::catalog::slug_to_category;
use deal_commerce::listing::Partition;
use deal_observability::UI_TARGET;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::{section, NotFound};
use crate::components::{CategoryGrid, DealGrid};
use crate::context::use_catalog;
use crate::error::WebError;

/// Category directory.
#[component]
pub fn CategoriesPage() -> impl IntoView {
    let categories = use_catalog().repository().list_categories();

    view! {
        <Title text="Categories"/>
        <h2>"Shop by Category"</h2>
        <CategoryGrid categories=categories/>
    }
}

/// Deals in one category, addressed by slug.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();
    let catalog = use_catalog();

    view! {
        {move || {
            let slug = slug();
            let categories = catalog.repository().list_categories();
            let Some(category) = slug_to_category(&slug, &categories).cloned() else {
                let err = WebError::not_found("Category", slug);
                tracing::debug!(target: UI_TARGET, error = %err, "unknown category route");
                return view! { <NotFound/> }.into_any();
            };

            let now = Utc::now();
            let deals = catalog.repository().list_deals();
            let matching = section(&deals, &Partition::category(slug));
            let heading = format!("{} {}", category.icon(), category.name);

            view! {
                <Title text=category.name.clone()/>
                <h2>{heading}</h2>
                {category.description.clone().map(|d| view! { <p>{d}</p> })}
                <DealGrid deals=matching now=now/>
                <p class="section-link"><a href="/categories">"All categories"</a></p>
            }
            .into_any()
        }}
    }
}
