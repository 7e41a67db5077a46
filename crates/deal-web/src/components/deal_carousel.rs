use chrono::{DateTime, Utc};
use deal_commerce::catalog::Deal;
use deal_commerce::listing::{partition, Partition};
use deal_core::CarouselState;
use leptos::prelude::*;

use super::DealCard;

/// Paged, wrapping carousel of deal cards.
#[component]
pub fn DealCarousel(deals: Vec<Deal>, now: DateTime<Utc>, per_page: usize) -> impl IntoView {
    let state = RwSignal::new(CarouselState::new(deals.len(), per_page));
    let deals = StoredValue::new(deals);

    let visible = move || {
        let range = state.with(CarouselState::visible_range);
        deals.with_value(|all| {
            partition(all, &Partition::range(range))
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let dots = move || {
        let current = state.get();
        (0..current.page_count())
            .map(|page| {
                let class = if page == current.page() { "dot active" } else { "dot" };
                view! {
                    <button
                        type="button"
                        class=class
                        aria-label=format!("Page {}", page + 1)
                        on:click=move |_| state.update(|c| c.go_to(page))
                    ></button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="carousel">
            <button
                type="button"
                class="carousel-nav prev"
                aria-label="Previous deals"
                on:click=move |_| state.update(CarouselState::prev)
            >
                "‹"
            </button>
            <div class="deals carousel-track">
                {move || visible().into_iter().map(|deal| {
                    view! { <DealCard deal=deal now=now/> }
                }).collect::<Vec<_>>()}
            </div>
            <button
                type="button"
                class="carousel-nav next"
                aria-label="Next deals"
                on:click=move |_| state.update(CarouselState::next)
            >
                "›"
            </button>
            <div class="carousel-dots">{dots}</div>
        </div>
    }
}
