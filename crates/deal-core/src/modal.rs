//! Modal open/close state.
//!
//! A modal can be opened from several places at once: its own trigger
//! button, a page signal sent from elsewhere in the tree, or a URL fragment.
//! They all converge on the same [`ModalState`], so any of them opens it and
//! only an explicit close, navigating away or unmounting closes it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Modals the storefront can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalId {
    /// Deal alert sign-up.
    DealAlerts,
    /// Partner program application form.
    PartnerApplication,
}

impl ModalId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalId::DealAlerts => "deal-alerts",
            ModalId::PartnerApplication => "partner-application",
        }
    }

    /// Dialog heading.
    pub fn title(&self) -> &'static str {
        match self {
            ModalId::DealAlerts => "Get Deal Alerts",
            ModalId::PartnerApplication => "Apply to Become a Partner",
        }
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What asked a modal to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalTrigger {
    /// The modal's own trigger element.
    Local,
    /// A page signal broadcast from elsewhere on the page.
    Signal,
    /// The URL fragment matched the modal's reserved value.
    Fragment,
}

impl ModalTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalTrigger::Local => "local",
            ModalTrigger::Signal => "signal",
            ModalTrigger::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ModalTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of the page location a modal reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLocation {
    /// URL path, without query or fragment.
    pub path: String,
    /// Whether the URL fragment names this modal.
    pub fragment_matches: bool,
}

impl PageLocation {
    pub fn new(path: impl Into<String>, fragment_matches: bool) -> Self {
        Self {
            path: path.into(),
            fragment_matches,
        }
    }
}

/// Visibility of one modal instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    opened_by: Option<ModalTrigger>,
}

impl ModalState {
    /// A closed modal.
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.opened_by.is_some()
    }

    /// The trigger that opened the modal, while it is open.
    pub fn opened_by(&self) -> Option<ModalTrigger> {
        self.opened_by
    }

    /// Open the modal. Returns `false` if it was already open, in which case
    /// the original trigger is kept.
    pub fn open(&mut self, trigger: ModalTrigger) -> bool {
        if self.is_open() {
            return false;
        }
        self.opened_by = Some(trigger);
        true
    }

    /// Close the modal. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        self.opened_by.take().is_some()
    }

    /// Move from the `previous` page location to `current`.
    ///
    /// A new path closes the modal whatever opened it. Losing the fragment
    /// only closes a modal the fragment opened. A matching fragment opens it.
    /// Returns whether the state changed.
    pub fn follow_location(
        &mut self,
        previous: Option<&PageLocation>,
        current: &PageLocation,
    ) -> bool {
        let before = *self;
        if let Some(previous) = previous {
            if previous.path != current.path {
                self.close();
            } else if previous.fragment_matches
                && !current.fragment_matches
                && self.opened_by == Some(ModalTrigger::Fragment)
            {
                self.close();
            }
        }
        if current.fragment_matches {
            self.open(ModalTrigger::Fragment);
        }
        *self != before
    }

    /// Flip between open (via `trigger`) and closed.
    pub fn toggle(&mut self, trigger: ModalTrigger) -> bool {
        if self.is_open() {
            self.close()
        } else {
            self.open(trigger)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGERS: [ModalTrigger; 3] = [
        ModalTrigger::Local,
        ModalTrigger::Signal,
        ModalTrigger::Fragment,
    ];

    #[test]
    fn test_open_then_close_from_every_trigger() {
        for trigger in TRIGGERS {
            let mut state = ModalState::closed();
            assert!(state.open(trigger));
            assert!(state.is_open());
            assert_eq!(state.opened_by(), Some(trigger));
            assert!(state.close());
            assert!(!state.is_open());
        }
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut state = ModalState::closed();
        assert!(state.open(ModalTrigger::Fragment));
        assert!(!state.open(ModalTrigger::Fragment));
        assert!(!state.open(ModalTrigger::Local));
        assert!(state.is_open());
        assert_eq!(state.opened_by(), Some(ModalTrigger::Fragment));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = ModalState::closed();
        assert!(!state.close());
        state.open(ModalTrigger::Signal);
        assert!(state.close());
        assert!(!state.close());
        assert_eq!(state, ModalState::closed());
    }

    #[test]
    fn test_converging_triggers_do_not_conflict() {
        let mut state = ModalState::closed();
        state.open(ModalTrigger::Signal);
        state.open(ModalTrigger::Fragment);
        state.open(ModalTrigger::Local);
        assert!(state.is_open());
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn test_new_path_closes_from_every_trigger() {
        let home = PageLocation::new("/", false);
        let deals = PageLocation::new("/deals", false);
        for trigger in TRIGGERS {
            let mut state = ModalState::closed();
            state.open(trigger);
            assert!(state.follow_location(Some(&home), &deals));
            assert!(!state.is_open());
        }
    }

    #[test]
    fn test_fragment_loaded_on_first_location() {
        let mut state = ModalState::closed();
        assert!(state.follow_location(None, &PageLocation::new("/", true)));
        assert_eq!(state.opened_by(), Some(ModalTrigger::Fragment));
    }

    #[test]
    fn test_dropping_fragment_closes_only_fragment_opened_modal() {
        let with = PageLocation::new("/", true);
        let without = PageLocation::new("/", false);

        let mut state = ModalState::closed();
        state.follow_location(None, &with);
        assert!(state.follow_location(Some(&with), &without));
        assert!(!state.is_open());

        let mut state = ModalState::closed();
        state.open(ModalTrigger::Signal);
        assert!(!state.follow_location(Some(&with), &without));
        assert_eq!(state.opened_by(), Some(ModalTrigger::Signal));
    }

    #[test]
    fn test_same_location_changes_nothing() {
        let here = PageLocation::new("/faq", false);
        let mut state = ModalState::closed();
        state.open(ModalTrigger::Local);
        assert!(!state.follow_location(Some(&here), &here.clone()));
        assert!(state.is_open());
    }

    #[test]
    fn test_new_path_with_fragment_stays_open() {
        let mut state = ModalState::closed();
        state.open(ModalTrigger::Local);
        let from = PageLocation::new("/", false);
        let to = PageLocation::new("/deals", true);
        assert!(state.follow_location(Some(&from), &to));
        assert_eq!(state.opened_by(), Some(ModalTrigger::Fragment));
    }

    #[test]
    fn test_toggle() {
        let mut state = ModalState::closed();
        assert!(state.toggle(ModalTrigger::Local));
        assert!(state.is_open());
        assert!(state.toggle(ModalTrigger::Local));
        assert!(!state.is_open());
    }

    #[test]
    fn test_modal_id_names() {
        assert_eq!(ModalId::DealAlerts.to_string(), "deal-alerts");
        assert_eq!(ModalId::PartnerApplication.title(), "Apply to Become a Partner");
    }
}
