use chrono::Utc;
use deal_commerce::catalog::Seller;
use deal_commerce::listing::Partition;
use deal_observability::UI_TARGET;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::{section, NotFound};
use crate::components::{DealGrid, SellerCard, SellerDirectory};
use crate::context::{use_catalog, Catalog};
use crate::error::WebError;

#[component]
pub fn SellersPage() -> impl IntoView {
    let sellers = use_catalog().repository().list_sellers();

    view! {
        <Title text="Sellers"/>
        <h2>"Seller Directory"</h2>
        <p>"Every seller here is reviewed before their deals go live."</p>
        <SellerDirectory sellers=sellers/>
    }
}

fn find_seller(catalog: &Catalog, slug: &str) -> Result<Seller, WebError> {
    Ok(catalog.repository().get_seller_by_slug(slug)?)
}

/// One seller and the deals they offer.
#[component]
pub fn SellerPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();
    let catalog = use_catalog();

    view! {
        {move || match find_seller(&catalog, &slug()) {
            Ok(seller) => {
                let now = Utc::now();
                let deals = catalog.repository().list_deals();
                let offered = section(&deals, &Partition::seller(seller.id.clone()));
                let description = seller.description.clone();
                view! {
                    <Title text=seller.name.clone()/>
                    <SellerCard seller=seller/>
                    {description.map(|d| view! { <p class="seller-description">{d}</p> })}
                    <h3>"Deals from this seller"</h3>
                    <DealGrid deals=offered now=now/>
                }
                .into_any()
            }
            Err(err) if err.is_not_found() => {
                tracing::debug!(target: UI_TARGET, error = %err, "unknown seller route");
                view! { <NotFound/> }.into_any()
            }
            Err(err) => view! {
                <p class="form-error">"Error loading seller: " {err.to_string()}</p>
            }
            .into_any(),
        }}
    }
}
