use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::FaqAccordion;
use crate::context::use_catalog;

#[component]
pub fn FaqPage() -> impl IntoView {
    let entries = use_catalog().repository().list_faqs();

    view! {
        <Title text="FAQ"/>
        <h2>"Frequently Asked Questions"</h2>
        <FaqAccordion entries=entries/>
    }
}
