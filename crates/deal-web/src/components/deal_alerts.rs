use deal_commerce::application::validate_email;
use deal_core::{ModalId, ModalTrigger, PageSignal};
use deal_observability::UI_TARGET;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::ModalShell;
use crate::hooks::{use_fragment_trigger, use_modal, use_signal_trigger};

/// Confirmation text for a sign-up, or the validation message.
///
/// Nothing is sent anywhere; the address is only checked.
pub fn alert_signup_message(email: &str) -> Result<String, String> {
    validate_email(email)
        .map(|()| format!("You're on the list! Deal alerts will go to {}.", email.trim()))
        .map_err(|err| err.to_string())
}

/// Deal alert sign-up.
///
/// Opens from its own button, from an `open-deal-alerts` page signal, or
/// from the `#deal-alerts` fragment.
#[component]
pub fn DealAlertsModal() -> impl IntoView {
    let modal = use_modal(ModalId::DealAlerts);
    use_signal_trigger(modal, PageSignal::OpenDealAlerts);
    use_fragment_trigger(modal);

    let email = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<Result<String, String>>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let result = alert_signup_message(&email.get_untracked());
        if result.is_ok() {
            tracing::info!(target: UI_TARGET, "deal alert sign-up accepted");
        }
        outcome.set(Some(result));
    };

    view! {
        <button
            type="button"
            class="alerts-trigger"
            on:click=move |_| modal.open(ModalTrigger::Local)
        >
            "🔔 Deal Alerts"
        </button>
        <ModalShell modal=modal>
            <p>"Be first to hear about flash sales and price drops from sellers you follow."</p>
            <form class="alerts-form" on:submit=on_submit>
                <label for="alerts-email">"Email"</label>
                <input id="alerts-email" type="email" placeholder="you@example.com" bind:value=email/>
                <button type="submit" class="btn">"Notify Me"</button>
            </form>
            {move || outcome.get().map(|result| match result {
                Ok(message) => view! { <p class="form-success">{message}</p> }.into_any(),
                Err(message) => view! { <p class="form-error">{message}</p> }.into_any(),
            })}
        </ModalShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_signup_message() {
        assert_eq!(
            alert_signup_message(" ana@example.com ").unwrap(),
            "You're on the list! Deal alerts will go to ana@example.com."
        );
        assert!(alert_signup_message("ana").unwrap_err().contains("email"));
        assert!(alert_signup_message("").is_err());
    }
}
