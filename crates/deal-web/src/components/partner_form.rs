use deal_commerce::address::{location_fields, supported_countries, LocationFields};
use deal_commerce::application::PartnerApplication;
use deal_core::{ModalId, ModalTrigger};
use deal_observability::UI_TARGET;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::ModalShell;
use crate::context::use_catalog;
use crate::hooks::use_modal;

/// Partner program application form in a modal, with its own trigger.
#[component]
pub fn PartnerApplicationModal() -> impl IntoView {
    let modal = use_modal(ModalId::PartnerApplication);
    let categories = StoredValue::new(use_catalog().repository().list_categories());

    let business_name = RwSignal::new(String::new());
    let contact_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());
    let country = RwSignal::new("US".to_string());
    let region = RwSignal::new(String::new());
    let postal_code = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<Result<String, String>>);

    let fields = Memo::new(move |_| country.with(|code| location_fields(code)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let application = PartnerApplication {
            business_name: business_name.get_untracked(),
            contact_name: contact_name.get_untracked(),
            email: email.get_untracked(),
            website: Some(website.get_untracked()).filter(|w| !w.trim().is_empty()),
            country_code: country.get_untracked(),
            region: region.get_untracked(),
            postal_code: postal_code.get_untracked(),
            category: category.get_untracked(),
        };
        let result = application
            .validate()
            .map(|()| {
                format!(
                    "Thanks, {}! We'll review your application and get back to you.",
                    application.business_name.trim()
                )
            })
            .map_err(|err| err.to_string());
        match &result {
            Ok(_) => tracing::info!(
                target: UI_TARGET,
                country = %application.country_code,
                category = %application.category,
                "partner application accepted"
            ),
            Err(message) => {
                tracing::debug!(target: UI_TARGET, %message, "partner application rejected")
            }
        }
        outcome.set(Some(result));
    };

    view! {
        <button
            type="button"
            class="btn"
            on:click=move |_| modal.open(ModalTrigger::Local)
        >
            "Apply Now"
        </button>
        <ModalShell modal=modal>
            <form class="partner-form" on:submit=on_submit>
                <label>"Business name" <input type="text" bind:value=business_name/></label>
                <label>"Contact name" <input type="text" bind:value=contact_name/></label>
                <label>"Email" <input type="email" bind:value=email/></label>
                <label>"Website" <input type="url" placeholder="https://" bind:value=website/></label>
                <label>
                    "Country"
                    <select
                        prop:value=move || country.get()
                        on:change=move |ev| {
                            country.set(event_target_value(&ev));
                            region.set(String::new());
                        }
                    >
                        {supported_countries().iter().map(|(code, name)| view! {
                            <option value=*code>{*name}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </label>
                <AddressFields fields=fields region=region postal_code=postal_code/>
                <label>
                    "Primary category"
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"Select a category"</option>
                        {categories.with_value(|all| all.iter().map(|c| view! {
                            <option value=c.name.clone()>{format!("{} {}", c.icon(), c.name)}</option>
                        }).collect::<Vec<_>>())}
                    </select>
                </label>
                <button type="submit" class="btn">"Submit Application"</button>
            </form>
            {move || outcome.get().map(|result| match result {
                Ok(message) => view! { <p class="form-success">{message}</p> }.into_any(),
                Err(message) => view! { <p class="form-error">{message}</p> }.into_any(),
            })}
        </ModalShell>
    }
}

/// Region and postal inputs shaped by the selected country.
#[component]
fn AddressFields(
    fields: Memo<LocationFields>,
    region: RwSignal<String>,
    postal_code: RwSignal<String>,
) -> impl IntoView {
    let region_input = move || {
        let schema = fields.get();
        match schema.region_options {
            Some(options) => view! {
                <select
                    prop:value=move || region.get()
                    on:change=move |ev| region.set(event_target_value(&ev))
                >
                    <option value="">{schema.region_placeholder}</option>
                    {options.iter().map(|opt| view! {
                        <option value=opt.code>{opt.name}</option>
                    }).collect::<Vec<_>>()}
                </select>
            }
            .into_any(),
            None => view! {
                <input type="text" placeholder=schema.region_placeholder bind:value=region/>
            }
            .into_any(),
        }
    };

    view! {
        <label>{move || fields.get().region_label} {region_input}</label>
        <label>
            {move || fields.get().postal_label}
            <input
                type="text"
                placeholder=move || fields.get().postal_placeholder
                bind:value=postal_code
            />
        </label>
    }
}
