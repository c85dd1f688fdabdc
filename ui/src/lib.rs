//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod anchor;
pub use anchor::{anchor_present, OVERLAY_ANCHOR_ID};

mod portal;
pub use portal::{MountAction, MountState};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;
