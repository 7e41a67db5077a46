use deal_commerce::catalog::FaqEntry;
use deal_core::AccordionState;
use leptos::prelude::*;

/// FAQ list where opening one answer closes the others.
#[component]
pub fn FaqAccordion(entries: Vec<FaqEntry>) -> impl IntoView {
    let state = RwSignal::new(AccordionState::new());

    view! {
        <div class="faq-list">
            {entries.into_iter().enumerate().map(|(index, entry)| {
                let is_open = move || state.with(|s| s.is_open(index));
                let FaqEntry { topic, question, answer } = entry;
                view! {
                    <div class="faq-item" class:open=is_open>
                        <button
                            type="button"
                            class="faq-question"
                            aria-expanded=move || is_open().to_string()
                            on:click=move |_| state.update(|s| s.toggle(index))
                        >
                            <span class="faq-topic">{topic}</span>
                            <span>{question}</span>
                            <span class="faq-chevron">{move || if is_open() { "−" } else { "+" }}</span>
                        </button>
                        <Show when=is_open>
                            <p class="faq-answer">{answer.clone()}</p>
                        </Show>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
