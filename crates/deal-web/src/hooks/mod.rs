//! Reactive wrappers around the `deal-core` state machines.

mod countdown;
mod modal;

pub use countdown::use_countdown;
pub use modal::{use_fragment_trigger, use_modal, use_signal_trigger, ModalHandle};
