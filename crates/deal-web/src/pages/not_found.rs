use leptos::prelude::*;
use leptos_meta::Title;

/// 404 page. Also rendered by detail routes whose slug does not resolve.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_wasi::response::ResponseOptions>() {
            resp.set_status(leptos_wasi::prelude::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found"/>
        <div class="not-found">
            <h1>"404"</h1>
            <p>"That page doesn't exist, or the deal has moved on."</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
