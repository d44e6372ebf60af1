use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::{content::Anchor, reveal::RevealFlag};

/// Reveal-on-intersect for a section root.
///
/// Returns the node ref to attach to the `<section>` and a signal that turns
/// true the first time the observer (configured with `threshold`) reports the
/// section as intersecting. The observer
/// disconnects itself after the first reveal; leptos-use also tears it down
/// when the section unmounts. Without observer support (or while rendering on
/// the server) the signal simply stays false.
pub fn use_reveal(anchor: Anchor, threshold: f64) -> (NodeRef<html::Section>, Signal<bool>) {
    let target = NodeRef::<html::Section>::new();
    let flag = RwSignal::new(RevealFlag::default());

    let _ = use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            if flag.with_untracked(RevealFlag::is_visible) {
                return;
            }
            let mut next = flag.get_untracked();
            let revealed = entries
                .iter()
                .any(|e| next.observe(e.is_intersecting()));
            if revealed {
                log::debug!("revealed #{}", anchor.id());
                flag.set(next);
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    let visible = Signal::derive(move || flag.get().is_visible());
    (target, visible)
}
