use chrono::Local;
use deal_core::{CountdownTarget, TimeRemaining};
use leptos::prelude::*;

/// Time left until `target`, recomputed once per second.
///
/// The interval only runs in the browser. It is cleared when the owning
/// component unmounts.
pub fn use_countdown(target: CountdownTarget) -> ReadSignal<TimeRemaining> {
    let (remaining, set_remaining) = signal(target.remaining(&Local::now()));

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::time::Duration;

        use deal_core::Countdown;
        use deal_observability::UI_TARGET;

        let countdown = RefCell::new(Countdown::new(target));
        let tick = move || {
            let left = countdown.borrow_mut().tick(&Local::now());
            set_remaining.set(left);
        };

        match set_interval_with_handle(tick, Duration::from_secs(1)) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => {
                tracing::warn!(
                    target: UI_TARGET,
                    error = ?err,
                    "failed to start countdown interval"
                )
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = set_remaining;

    remaining
}
