use leptos::prelude::*;

use crate::context::use_site_config;

#[component]
pub fn Header() -> impl IntoView {
    let config = use_site_config();

    view! {
        <header>
            <a href="/" class="brand">
                <h1>{config.name}</h1>
                <span class="tagline">{config.tagline}</span>
            </a>
            <nav>
                <a href="/">"Home"</a>
                <a href="/deals">"Deals"</a>
                <a href="/categories">"Categories"</a>
                <a href="/sellers">"Sellers"</a>
                <a href="/partners">"Partners"</a>
                <a href="/faq">"FAQ"</a>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_site_config();
    let alerts_href = format!("#{}", config.deal_alerts_fragment.trim_start_matches('#'));

    view! {
        <footer>
            <nav>
                <a href="/deals/expired">"Missed deals"</a>
                <a href="/partners">"Become a partner"</a>
                <a href=alerts_href>"Get deal alerts"</a>
                <a href="/faq">"Help"</a>
            </nav>
            <p>{format!("© {} - prices and availability change daily.", config.name)}</p>
        </footer>
    }
}
