//! Attachment bookkeeping for overlay subtrees.
//!
//! The overlay is a detachable render subtree: it belongs under the document's
//! anchor exactly while the dialog is open and the anchor exists. The decision
//! is kept as an explicit plan/apply pair so it stays independent of the DOM.

/// What the current render pass should do with the overlay subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountAction {
    /// Re-parent the subtree under the anchor.
    Attach,
    /// The subtree no longer belongs under the anchor.
    Detach,
    /// Nothing to do.
    Keep,
}

/// Tracks whether the overlay subtree currently lives under the anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountState {
    attached: bool,
}

impl MountState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Decide the action for the current render pass. The subtree belongs
    /// under the anchor iff the dialog is open and the anchor is present.
    pub fn plan(&self, open: bool, anchor_present: bool) -> MountAction {
        match (self.attached, open && anchor_present) {
            (false, true) => MountAction::Attach,
            (true, false) => MountAction::Detach,
            _ => MountAction::Keep,
        }
    }

    pub fn apply(&mut self, action: MountAction) {
        match action {
            MountAction::Attach => self.attached = true,
            MountAction::Detach => self.attached = false,
            MountAction::Keep => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_requires_open_and_anchor() {
        let state = MountState::new();
        assert_eq!(state.plan(false, false), MountAction::Keep);
        assert_eq!(state.plan(false, true), MountAction::Keep);
        assert_eq!(state.plan(true, false), MountAction::Keep);
        assert_eq!(state.plan(true, true), MountAction::Attach);
    }

    #[test]
    fn test_detach_when_closed() {
        let mut state = MountState::new();
        state.apply(MountAction::Attach);
        assert!(state.is_attached());

        assert_eq!(state.plan(false, true), MountAction::Detach);
    }

    #[test]
    fn test_detach_when_anchor_removed_while_open() {
        let mut state = MountState::new();
        state.apply(MountAction::Attach);

        // The dialog is still open but the anchor left the document.
        assert_eq!(state.plan(true, false), MountAction::Detach);
    }

    #[test]
    fn test_plan_is_idempotent_after_apply() {
        let mut state = MountState::new();

        let action = state.plan(true, true);
        state.apply(action);
        assert_eq!(state.plan(true, true), MountAction::Keep);

        let action = state.plan(false, true);
        state.apply(action);
        assert_eq!(state.plan(false, true), MountAction::Keep);
    }

    #[test]
    fn test_keep_preserves_attachment() {
        let mut state = MountState::new();
        state.apply(MountAction::Keep);
        assert!(!state.is_attached());

        state.apply(MountAction::Attach);
        state.apply(MountAction::Keep);
        assert!(state.is_attached());
    }
}
