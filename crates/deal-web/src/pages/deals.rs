use chrono::Utc;
use deal_commerce::catalog::ExpiryStatus;
use deal_commerce::listing::{brands, Partition};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::section;
use crate::components::{CountdownBanner, DealGrid};
use crate::context::use_catalog;

/// Live and upcoming deals.
#[component]
pub fn DealsPage() -> impl IntoView {
    let deals = use_catalog().repository().list_deals();
    let now = Utc::now();

    let live = section(&deals, &Partition::expiry(ExpiryStatus::Live, now));
    let upcoming = section(&deals, &Partition::expiry(ExpiryStatus::Upcoming, now));
    let brand_links = brands(&deals)
        .into_iter()
        .map(|brand| {
            let href = format!("/brands/{brand}");
            view! { <li class="chip"><a href=href>{brand}</a></li> }
        })
        .collect::<Vec<_>>();

    view! {
        <Title text="All Deals"/>
        <h2>"All Deals"</h2>
        <CountdownBanner/>
        <ul class="chips brand-chips">{brand_links}</ul>

        <h3>"Live Now"</h3>
        <DealGrid deals=live now=now/>

        <h3>"Coming Soon"</h3>
        <DealGrid deals=upcoming now=now empty="Nothing scheduled yet."/>
    }
}

/// Deals that already ended.
#[component]
pub fn ExpiredDealsPage() -> impl IntoView {
    let deals = use_catalog().repository().list_deals();
    let now = Utc::now();
    let expired = section(&deals, &Partition::expiry(ExpiryStatus::Expired, now));

    view! {
        <Title text="Expired Deals"/>
        <h2>"Deals You Missed"</h2>
        <p>"These have ended. Sign up for deal alerts so the next one doesn't slip by."</p>
        <DealGrid deals=expired now=now empty="No expired deals."/>
    }
}

/// Every deal from one brand.
#[component]
pub fn BrandPage() -> impl IntoView {
    let params = use_params_map();
    let brand = move || params.get().get("brand").unwrap_or_default();
    let catalog = use_catalog();

    view! {
        {move || {
            let brand = brand();
            let now = Utc::now();
            let deals = catalog.repository().list_deals();
            let matching = section(&deals, &Partition::brand(brand.clone()));
            let empty = format!("No deals from {brand} right now.");
            view! {
                <Title text=brand.clone()/>
                <h2>{format!("Deals from {brand}")}</h2>
                <DealGrid deals=matching now=now empty=empty/>
            }
        }}
    }
}
