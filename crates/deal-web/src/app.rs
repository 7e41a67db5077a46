//! Application shell and router.

use chrono::Utc;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{DealAlertsModal, Footer, Header};
use crate::config::site_config;
use crate::context::{provide_storefront_context, Catalog};
use crate::pages::{
    BrandPage, CategoriesPage, CategoryPage, DealsPage, ExpiredDealsPage, FaqPage, HomePage,
    NotFound, PartnersPage, SellerPage, SellersPage,
};

// ============================================================================
// Shell (SSR entry point)
// ============================================================================

#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone() root=""/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = site_config();
    let site_name = config.name.clone();
    let description = config.tagline.clone();
    let catalog = Catalog::seeded(Utc::now(), config.currency);
    provide_storefront_context(config, catalog);

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/deal_web.css"/>
        <Meta name="description" content=description/>
        <Title formatter=move |page: String| format!("{page} | {site_name}")/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/deals") view=DealsPage/>
                    <Route path=path!("/deals/expired") view=ExpiredDealsPage/>
                    <Route path=path!("/brands/:brand") view=BrandPage/>
                    <Route path=path!("/categories") view=CategoriesPage/>
                    <Route path=path!("/categories/:slug") view=CategoryPage/>
                    <Route path=path!("/sellers") view=SellersPage/>
                    <Route path=path!("/sellers/:slug") view=SellerPage/>
                    <Route path=path!("/partners") view=PartnersPage/>
                    <Route path=path!("/faq") view=FaqPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <DealAlertsModal/>
            <Footer/>
        </Router>
    }
}
