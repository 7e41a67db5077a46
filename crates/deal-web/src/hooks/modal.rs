use deal_core::{
    FragmentCommand, ModalId, ModalState, ModalTrigger, PageLocation, PageSignal,
};
use deal_observability::UI_TARGET;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::context::{use_signal_bus, use_site_config};

/// Reactive handle to one modal's [`ModalState`].
#[derive(Debug, Clone, Copy)]
pub struct ModalHandle {
    id: ModalId,
    state: RwSignal<ModalState>,
}

impl ModalHandle {
    pub fn id(&self) -> ModalId {
        self.id
    }

    /// Tracked read of the open flag.
    pub fn is_open(&self) -> bool {
        self.state.with(ModalState::is_open)
    }

    pub fn opened_by(&self) -> Option<ModalTrigger> {
        self.state.with(ModalState::opened_by)
    }

    /// Open the modal. Opening an open modal does nothing.
    pub fn open(&self, trigger: ModalTrigger) {
        if self.state.with_untracked(ModalState::is_open) {
            return;
        }
        self.state.update(|state| {
            state.open(trigger);
        });
        tracing::info!(target: UI_TARGET, modal = %self.id, trigger = %trigger, "modal opened");
    }

    /// Close the modal. Closing a closed modal does nothing.
    pub fn close(&self) {
        if !self.state.with_untracked(ModalState::is_open) {
            return;
        }
        self.state.update(|state| {
            state.close();
        });
        tracing::info!(target: UI_TARGET, modal = %self.id, "modal closed");
    }

    /// Apply a location change. See [`ModalState::follow_location`].
    pub fn follow_location(&self, previous: Option<&PageLocation>, current: &PageLocation) {
        let mut next = self.state.get_untracked();
        let was_open = next.is_open();
        if !next.follow_location(previous, current) {
            return;
        }
        self.state.set(next);
        match (was_open, next.opened_by()) {
            (_, Some(trigger)) => tracing::info!(
                target: UI_TARGET,
                modal = %self.id,
                trigger = %trigger,
                "modal opened"
            ),
            (true, None) => tracing::info!(
                target: UI_TARGET,
                modal = %self.id,
                path = %current.path,
                "modal closed on navigation"
            ),
            (false, None) => {}
        }
    }
}

/// A closed modal owned by the calling component.
pub fn use_modal(id: ModalId) -> ModalHandle {
    ModalHandle {
        id,
        state: RwSignal::new(ModalState::closed()),
    }
}

/// Open `modal` whenever `signal` is broadcast while the caller is mounted.
pub fn use_signal_trigger(modal: ModalHandle, signal: PageSignal) {
    let subscription = use_signal_bus().subscribe(signal, move |_| {
        modal.open(ModalTrigger::Signal);
    });
    on_cleanup(move || subscription.cancel());
}

/// Open `modal` when the URL fragment names it, on load and on every change,
/// and close it when the page moves to another path.
///
/// Closing a modal the fragment opened drops the fragment from the URL, so
/// following the same link again reopens it. Dropping the fragment (the back
/// button) closes a modal the fragment opened.
pub fn use_fragment_trigger(modal: ModalHandle) {
    let reserved = use_site_config().deal_alerts_fragment;
    let location = use_location();
    let (hash, pathname, query) = (location.hash, location.pathname, location.query);
    let navigate = use_navigate();

    let command = Memo::new(move |_| {
        hash.with(|hash| FragmentCommand::parse_with(hash, &reserved))
            .filter(|command| command.modal() == modal.id())
    });

    Effect::new(move |previous: Option<PageLocation>| {
        let current = PageLocation::new(pathname.get(), command.get().is_some());
        modal.follow_location(previous.as_ref(), &current);
        current
    });

    Effect::new(move |was_open: Option<bool>| {
        let open = modal.is_open();
        if was_open == Some(true) && !open && command.get_untracked().is_some() {
            let path = format!(
                "{}{}",
                pathname.get_untracked(),
                query.with_untracked(|q| q.to_query_string())
            );
            navigate(
                &path,
                NavigateOptions {
                    replace: true,
                    scroll: false,
                    ..Default::default()
                },
            );
        }
        open
    });
}
