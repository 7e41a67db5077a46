use deal_commerce::catalog::{category_icon, Seller};
use leptos::prelude::*;

use crate::format::{rating_stars, review_count_label};

/// Directory card for one seller.
#[component]
pub fn SellerCard(seller: Seller) -> impl IntoView {
    let href = seller.href();
    let initials = seller.initials();
    let rating = seller
        .rating
        .map(|r| (rating_stars(r), review_count_label(seller.review_count)));

    view! {
        <article class="seller-card">
            <div class="seller-logo">
                {match seller.logo.clone() {
                    Some(src) => view! { <img src=src alt=seller.name.clone()/> }.into_any(),
                    None => view! { <span class="seller-initials">{initials}</span> }.into_any(),
                }}
            </div>
            <div class="seller-info">
                <h3>
                    <a href=href.clone()>{seller.name.clone()}</a>
                    {seller.verified.then(|| view! { <span class="badge verified">"✓ Verified"</span> })}
                </h3>
                {seller.tagline.clone().map(|t| view! { <p class="seller-tagline">{t}</p> })}
                {rating.map(|(stars, reviews)| view! {
                    <p class="rating"><span class="stars">{stars}</span> " " <span class="reviews">{reviews}</span></p>
                })}
                {seller.location.clone().map(|l| view! { <p class="seller-location">{l}</p> })}
                <ul class="chips">
                    {seller.categories.iter().map(|name| view! {
                        <li class="chip">{category_icon(name)} " " {name.clone()}</li>
                    }).collect::<Vec<_>>()}
                </ul>
                <a href=href class="btn btn-secondary">"View Deals"</a>
            </div>
        </article>
    }
}

/// Every seller, in directory order.
#[component]
pub fn SellerDirectory(sellers: Vec<Seller>) -> impl IntoView {
    view! {
        <div class="seller-directory">
            {sellers.into_iter().map(|seller| view! { <SellerCard seller=seller/> }).collect::<Vec<_>>()}
        </div>
    }
}
