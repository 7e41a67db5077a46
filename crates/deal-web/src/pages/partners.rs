use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::PartnerApplicationModal;
use crate::context::use_site_config;

const BENEFITS: [(&str, &str); 3] = [
    ("📈", "Reach shoppers who are ready to buy today."),
    ("🏷️", "Feature time-limited offers in the daily countdown."),
    ("✓", "Earn a verified badge after review."),
];

#[component]
pub fn PartnersPage() -> impl IntoView {
    let name = use_site_config().name;

    view! {
        <Title text="Become a Partner"/>
        <section class="hero">
            <h2>{format!("Sell on {name}")}</h2>
            <p>"Join the partner program and put your best offers in front of deal hunters."</p>
            <PartnerApplicationModal/>
        </section>
        <ul class="benefits">
            {BENEFITS.iter().map(|(icon, text)| view! {
                <li><span class="benefit-icon">{*icon}</span> {*text}</li>
            }).collect::<Vec<_>>()}
        </ul>
    }
}
