use chrono::{DateTime, Utc};
use deal_commerce::catalog::{category_icon, Deal};
use deal_commerce::Money;
use leptos::prelude::*;

use crate::format::{expiry_label, rating_stars, review_count_label};

/// Card for a single deal: image, pricing, rating and timing as of `now`.
#[component]
pub fn DealCard(deal: Deal, now: DateTime<Utc>) -> impl IntoView {
    let status = deal.status_at(now);
    let discount = deal.discount_percent();
    let original = deal.original_price.as_ref().map(Money::display);
    let price = deal.price.display();
    let image = deal.primary_image().map(str::to_string);
    let icon = category_icon(&deal.category);
    let timing = expiry_label(&deal, now);
    let brand_href = format!("/brands/{}", deal.brand);
    let rating = deal
        .rating
        .map(|r| (rating_stars(r), review_count_label(deal.review_count.unwrap_or(0))));
    let card_class = format!("deal-card deal-{}", status.as_str());
    let status_class = format!("badge status-{}", status.as_str());

    view! {
        <article class=card_class>
            <div class="deal-image">
                {match image {
                    Some(src) => view! { <img src=src alt=deal.name.clone() loading="lazy"/> }.into_any(),
                    None => view! { <span class="deal-icon">{icon}</span> }.into_any(),
                }}
                {discount.map(|pct| view! { <span class="badge discount">{format!("-{pct}%")}</span> })}
                <span class=status_class>{status.label()}</span>
            </div>
            <div class="deal-info">
                <a class="deal-brand" href=brand_href>{deal.brand.clone()}</a>
                <h3>{deal.name.clone()}</h3>
                {deal.description.clone().map(|d| view! { <p class="deal-description">{d}</p> })}
                <p class="deal-price">
                    <span class="price">{price}</span>
                    {original.map(|o| view! { <s class="original-price">{o}</s> })}
                </p>
                {rating.map(|(stars, reviews)| view! {
                    <p class="rating">
                        <span class="stars">{stars}</span>
                        " "
                        <span class="reviews">{reviews}</span>
                    </p>
                })}
                {deal.coupon_code.clone().map(|code| view! {
                    <p class="coupon">"Code: " <code>{code}</code></p>
                })}
                {timing.map(|t| view! { <p class="deal-timing">{t}</p> })}
            </div>
        </article>
    }
}

/// Grid of deal cards in the order given.
#[component]
pub fn DealGrid(
    deals: Vec<Deal>,
    now: DateTime<Utc>,
    #[prop(into, default = "No deals here right now. Check back soon!".to_string())] empty: String,
) -> impl IntoView {
    if deals.is_empty() {
        return view! { <p class="empty">{empty}</p> }.into_any();
    }

    view! {
        <div class="deals">
            {deals.into_iter().map(|deal| {
                view! { <DealCard deal=deal now=now/> }
            }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
