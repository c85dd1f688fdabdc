//! Render target resolution for overlay content.
//!
//! Overlays do not render where they are called. They re-parent under a
//! dedicated anchor element the hosting document exposes at a well-known id.
//! A missing anchor is not an error: lookups report absence and the overlay
//! renders nothing.

/// Id of the element overlay subtrees mount into. The shell renders it once,
/// outside its own content.
pub const OVERLAY_ANCHOR_ID: &str = "overlay-root";

/// Whether the document currently contains the overlay anchor.
#[cfg(target_arch = "wasm32")]
pub fn anchor_present() -> bool {
    anchor_element().is_some()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn anchor_present() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
fn anchor_element() -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(OVERLAY_ANCHOR_ID)
}

/// Move the element with `node_id` under the anchor.
///
/// Returns `true` when the node is a child of the anchor afterwards. Missing
/// window, document, anchor or node all decline silently.
#[cfg(target_arch = "wasm32")]
pub(crate) fn adopt(node_id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(anchor) = document.get_element_by_id(OVERLAY_ANCHOR_ID) else {
        return false;
    };
    let Some(node) = document.get_element_by_id(node_id) else {
        return false;
    };
    if node
        .parent_element()
        .is_some_and(|p| p.id() == OVERLAY_ANCHOR_ID)
    {
        return true;
    }
    anchor.append_child(&node).is_ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn adopt(_node_id: &str) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_anchor_declines_silently() {
        // Native targets have no document: the resolver reports absence and
        // adoption declines instead of raising.
        assert!(!anchor_present());
        assert!(!adopt("overlay-backdrop-0"));
    }
}
