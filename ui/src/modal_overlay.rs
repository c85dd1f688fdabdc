use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::anchor;
use crate::portal::{MountAction, MountState};

const OVERLAY_CSS: Asset = asset!("/assets/overlay.css");

/// Counter for minting per-instance backdrop ids
static BACKDROP_SEQ: AtomicU64 = AtomicU64::new(0);

/// A full-screen overlay that centers its children in a modal card, mounted
/// under the document's overlay anchor rather than in the caller's subtree.
/// Clicking outside the card triggers `on_dismiss`; clicks inside the card
/// never do.
///
/// When `is_open` is false, or the document exposes no anchor, the component
/// renders nothing.
#[component]
pub fn ModalOverlay(
    is_open: ReadOnlySignal<bool>,
    on_dismiss: EventHandler<()>,
    children: Element,
) -> Element {
    let backdrop_id = use_hook(|| {
        let seq = BACKDROP_SEQ.fetch_add(1, Ordering::Relaxed);
        format!("overlay-backdrop-{seq}")
    });
    let mut mount = use_signal(MountState::new);

    // After each render, re-parent the rendered backdrop under the anchor.
    // The renderer itself removes the subtree when the overlay closes, so the
    // detach side only updates the bookkeeping.
    let adopt_id = backdrop_id.clone();
    use_effect(move || {
        let open = is_open();
        let action = mount.peek().plan(open, anchor::anchor_present());
        match action {
            MountAction::Attach => {
                if anchor::adopt(&adopt_id) {
                    mount.write().apply(MountAction::Attach);
                    tracing::debug!("overlay {adopt_id} attached");
                }
            }
            MountAction::Detach => {
                mount.write().apply(MountAction::Detach);
                tracing::debug!("overlay {adopt_id} detached");
            }
            MountAction::Keep => {}
        }
    });

    if !is_open() || !anchor::anchor_present() {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: OVERLAY_CSS }
        div {
            id: "{backdrop_id}",
            class: "overlay-backdrop",
            onclick: move |_| on_dismiss.call(()),
            div {
                class: "overlay-panel",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
