use leptos::prelude::*;

use crate::context::use_site_config;
use crate::format::countdown_unit;
use crate::hooks::use_countdown;

/// Under an hour left gets urgency styling.
const URGENT_SECONDS: u64 = 3_600;

/// "Deals end in" banner counting down to the configured target.
#[component]
pub fn CountdownBanner() -> impl IntoView {
    let remaining = use_countdown(use_site_config().countdown);

    let ended = move || remaining.get().is_zero();
    let urgent = move || {
        let left = remaining.get();
        !left.is_zero() && left.total_seconds() < URGENT_SECONDS
    };

    view! {
        <section class="countdown-banner" class:urgent=urgent class:ended=ended aria-live="polite">
            {move || if ended() {
                view! {
                    <p class="countdown-ended">"These deals have ended. Fresh ones are on the way!"</p>
                }.into_any()
            } else {
                view! {
                    <p class="countdown-title">"Deals end in"</p>
                    <div class="countdown-units">
                        {remaining.get().units().into_iter().map(|(value, label)| view! {
                            <div class="countdown-unit">
                                <span class="countdown-value">{countdown_unit(value, label)}</span>
                                <span class="countdown-label">{label}</span>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_any()
            }}
        </section>
    }
}
