use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant};
use ui::icons::FaXmark;
use ui::{Icon, ModalOverlay, OVERLAY_ANCHOR_ID};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut show_dialog = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        main {
            class: "app-shell",
            h1 { "Overlay dialog demo" }
            p {
                class: "app-intro",
                "The dialog opened below is mounted under the document's "
                "overlay anchor, not inside this view. Click the backdrop or "
                "the close button to dismiss it."
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| show_dialog.set(true),
                "Open dialog"
            }
        }

        ModalOverlay {
            is_open: show_dialog(),
            on_dismiss: move |_| show_dialog.set(false),
            div {
                class: "dialog-body",
                button {
                    class: "dialog-close",
                    onclick: move |_| show_dialog.set(false),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
                h2 { class: "dialog-title", "Mounted elsewhere" }
                p {
                    class: "dialog-text",
                    "This panel lives under the anchor element at the end of "
                    "the document, outside the shell's subtree. Clicks inside "
                    "it stay inside it."
                }
            }
        }

        // The well-known mount point overlays re-parent into.
        div { id: OVERLAY_ANCHOR_ID }
    }
}
