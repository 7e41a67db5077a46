//! Countdown, modal coordination and site configuration for DealPulse.
//!
//! This crate provides the UI-independent logic the storefront components
//! are built on:
//! - `TimeRemaining` / `Countdown` - per-second countdown arithmetic
//! - `ModalState` - open/close state shared by every modal trigger
//! - `SignalBus` - page-wide signals with explicit subscription handles
//! - `FragmentCommand` - URL fragments that act as commands
//! - `CarouselState` / `AccordionState` - paging and disclosure state
//! - `SiteConfig` - storefront configuration

mod accordion;
mod carousel;
mod config;
mod countdown;
mod fragment;
mod modal;
mod signal;

pub use accordion::*;
pub use carousel::*;
pub use config::*;
pub use countdown::*;
pub use fragment::*;
pub use modal::*;
pub use signal::*;
