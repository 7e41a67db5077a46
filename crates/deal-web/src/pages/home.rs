use chrono::Utc;
use deal_commerce::catalog::ExpiryStatus;
use deal_commerce::listing::Partition;
use deal_core::PageSignal;
use leptos::prelude::*;
use leptos_meta::Title;

use super::section;
use crate::components::{CategoryGrid, CountdownBanner, DealCarousel, DealGrid, SignalButton};
use crate::context::{use_catalog, use_site_config};

/// Home page: hero, countdown, featured carousel and live deals.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_site_config();
    let catalog = use_catalog();
    let now = Utc::now();

    let deals = catalog.repository().list_deals();
    let featured = section(&deals, &Partition::Featured)
        .into_iter()
        .filter(|deal| deal.status_at(now) != ExpiryStatus::Expired)
        .take(config.featured_limit)
        .collect::<Vec<_>>();
    let live = section(&deals, &Partition::expiry(ExpiryStatus::Live, now));
    let categories = catalog.repository().list_categories();

    view! {
        <Title text="Today's Deals"/>
        <section class="hero">
            <h2>{config.tagline.clone()}</h2>
            <p>"Hand-picked discounts from verified sellers, refreshed every day."</p>
            <div class="hero-actions">
                <a href="/deals" class="btn">"Browse Deals"</a>
                <SignalButton signal=PageSignal::OpenDealAlerts class="btn btn-secondary">
                    "Get Deal Alerts"
                </SignalButton>
            </div>
        </section>

        <CountdownBanner/>

        <h2>"Featured Deals"</h2>
        <DealCarousel deals=featured now=now per_page=config.carousel_page_size/>

        <h2>"Live Now"</h2>
        <DealGrid deals=live now=now/>

        <h2>"Shop by Category"</h2>
        <CategoryGrid categories=categories/>

        <p class="section-link">
            <a href="/deals/expired">"See the deals you missed"</a>
        </p>
    }
}
