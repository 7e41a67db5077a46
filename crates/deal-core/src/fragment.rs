//! URL fragments that act as commands.
//!
//! Linking to `/#deal-alerts` (or any page with that fragment) opens the
//! deal alerts modal. The fragment is read on load and on every change.

use crate::modal::ModalId;
use crate::signal::PageSignal;

/// Reserved fragment that opens the deal alerts modal.
pub const DEAL_ALERTS_FRAGMENT: &str = "deal-alerts";

/// A command carried by the URL fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentCommand {
    OpenDealAlerts,
}

impl FragmentCommand {
    /// Parse a fragment, with or without its leading `#`, against the
    /// default reserved value.
    pub fn parse(fragment: &str) -> Option<Self> {
        Self::parse_with(fragment, DEAL_ALERTS_FRAGMENT)
    }

    /// Parse a fragment against a configured reserved value.
    ///
    /// Matching is exact. Anything else, including an empty fragment, is
    /// not a command.
    pub fn parse_with(fragment: &str, deal_alerts: &str) -> Option<Self> {
        let value = fragment.strip_prefix('#').unwrap_or(fragment);
        if !value.is_empty() && value == deal_alerts.trim_start_matches('#') {
            Some(FragmentCommand::OpenDealAlerts)
        } else {
            None
        }
    }

    /// The default fragment for this command, without `#`.
    pub fn fragment(&self) -> &'static str {
        match self {
            FragmentCommand::OpenDealAlerts => DEAL_ALERTS_FRAGMENT,
        }
    }

    /// Same-page link that issues this command.
    pub fn href(&self) -> String {
        format!("#{}", self.fragment())
    }

    /// The page signal with the same effect.
    pub fn signal(&self) -> PageSignal {
        match self {
            FragmentCommand::OpenDealAlerts => PageSignal::OpenDealAlerts,
        }
    }

    /// The modal this command opens.
    pub fn modal(&self) -> ModalId {
        match self {
            FragmentCommand::OpenDealAlerts => ModalId::DealAlerts,
        }
    }
}
