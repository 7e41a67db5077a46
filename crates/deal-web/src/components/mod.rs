//! Presentational components.

mod category;
mod countdown_banner;
mod deal_alerts;
mod deal_card;
mod deal_carousel;
mod faq;
mod layout;
mod modal;
mod partner_form;
mod seller;

pub use category::CategoryGrid;
pub use countdown_banner::CountdownBanner;
pub use deal_alerts::DealAlertsModal;
pub use deal_card::{DealCard, DealGrid};
pub use deal_carousel::DealCarousel;
pub use faq::FaqAccordion;
pub use layout::{Footer, Header};
pub use modal::{ModalShell, SignalButton};
pub use partner_form::PartnerApplicationModal;
pub use seller::{SellerCard, SellerDirectory};
