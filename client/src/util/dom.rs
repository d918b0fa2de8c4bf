//! DOM glue for the drag host: drop/drag markers, rect measuring, and the
//! browser side of export (download, clipboard).
//!
//! Components mark elements with `data-drop-kind`/`data-drop-id` (droppable
//! regions) and `data-drag-kind`/`data-drag-id` (draggable handles). The
//! drag host reads those markers back on every pointer event instead of
//! keeping a registry, so a re-rendered element is always measured fresh.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use grid::collision::CollisionTarget;
use grid::container::ContainerId;
use grid::drag::DragSubject;
use grid::geometry::{Point, Rect};

pub const DROP_KIND_ATTR: &str = "data-drop-kind";
pub const DROP_ID_ATTR: &str = "data-drop-id";
pub const DRAG_KIND_ATTR: &str = "data-drag-kind";
pub const DRAG_ID_ATTR: &str = "data-drag-id";

pub const KIND_CONTAINER: &str = "container";
pub const KIND_CHARACTER: &str = "character";
pub const KIND_TIER_HANDLE: &str = "tier-handle";
pub const KIND_TIER: &str = "tier";

/// `id` of the drag host's root element.
pub const GRID_ELEMENT_ID: &str = "tier-list-grid";

/// Droppable target for a `data-drop-kind`/`data-drop-id` pair.
pub fn drop_target(kind: &str, id: &str) -> Option<CollisionTarget> {
    if id.is_empty() {
        return None;
    }
    match kind {
        KIND_CONTAINER => Some(CollisionTarget::Container(ContainerId::from_key(id))),
        KIND_CHARACTER => Some(CollisionTarget::Character(id.to_owned())),
        KIND_TIER_HANDLE => Some(CollisionTarget::TierHandle(id.to_owned())),
        _ => None,
    }
}

/// Draggable subject for a `data-drag-kind`/`data-drag-id` pair.
pub fn drag_subject(kind: &str, id: &str) -> Option<DragSubject> {
    if id.is_empty() {
        return None;
    }
    match kind {
        KIND_CHARACTER => Some(DragSubject::Character(id.to_owned())),
        KIND_TIER => Some(DragSubject::Tier(id.to_owned())),
        _ => None,
    }
}

/// Keys the drag host swallows so the page does not scroll or submit while
/// a keyboard drag is in progress.
pub fn should_prevent_default_key(key: &str, dragging: bool) -> bool {
    match key {
        " " | "Enter" => true,
        "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" | "Escape" => dragging,
        _ => false,
    }
}

/// Inline style that keeps an element readable by screen readers but off
/// screen, independent of any stylesheet.
pub const VISUALLY_HIDDEN_STYLE: &str = "position: absolute; width: 1px; height: 1px; padding: 0; margin: -1px; \
     overflow: hidden; clip: rect(0, 0, 0, 0); white-space: nowrap; border: 0";

/// Stacking level of the drag overlay, above every tier row and panel.
pub const OVERLAY_Z_INDEX: u32 = 1000;

/// Inline style for the drag overlay: taken out of flow, placed over the
/// lifted element's document-space rect, then translated by the drag offset.
/// The overlay never receives pointer events, so hit testing sees what is
/// underneath it.
pub fn overlay_style(origin: Rect, offset: Point) -> String {
    format!(
        "position: absolute; pointer-events: none; z-index: {OVERLAY_Z_INDEX}; \
         left: {}px; top: {}px; width: {}px; height: {}px; transform: translate3d({}px, {}px, 0)",
        origin.x, origin.y, origin.width, origin.height, offset.x, offset.y
    )
}

#[cfg(feature = "csr")]
mod browser {
    use grid::collision::Droppable;
    use grid::drag::DragSubject;
    use grid::geometry::{Point, Rect};
    use wasm_bindgen::{JsCast, JsValue};

    use super::{DRAG_ID_ATTR, DRAG_KIND_ATTR, DROP_ID_ATTR, DROP_KIND_ATTR, drag_subject, drop_target};

    /// Every marked droppable under `root`, in document order, with its
    /// current viewport rect.
    pub fn measure_droppables(root: &web_sys::Element) -> Vec<Droppable> {
        let Ok(nodes) = root.query_selector_all(&format!("[{DROP_KIND_ATTR}]")) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .filter_map(|el| {
                let kind = el.get_attribute(DROP_KIND_ATTR)?;
                let id = el.get_attribute(DROP_ID_ATTR)?;
                let target = drop_target(&kind, &id)?;
                let r = el.get_bounding_client_rect();
                Some(Droppable::new(target, Rect::new(r.x(), r.y(), r.width(), r.height())))
            })
            .collect()
    }

    /// Draggable subject whose handle contains `target`.
    pub fn subject_for(target: Option<web_sys::EventTarget>) -> Option<DragSubject> {
        let el = target?.dyn_into::<web_sys::Element>().ok()?;
        subject_of(&el)
    }

    /// Draggable subject holding keyboard focus.
    pub fn focused_subject() -> Option<DragSubject> {
        let el = web_sys::window()?.document()?.active_element()?;
        subject_of(&el)
    }

    /// Document-space rect of the handle for `subject` under `root`.
    pub fn subject_rect(root: &web_sys::Element, subject: &DragSubject, scroll: Point) -> Option<Rect> {
        let nodes = root.query_selector_all(&format!("[{DRAG_KIND_ATTR}]")).ok()?;
        let el = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .find(|el| subject_of(el).as_ref() == Some(subject))?;
        let r = el.get_bounding_client_rect();
        Some(Rect::new(r.x() + scroll.x, r.y() + scroll.y, r.width(), r.height()))
    }

    fn subject_of(el: &web_sys::Element) -> Option<DragSubject> {
        let handle = el.closest(&format!("[{DRAG_KIND_ATTR}]")).ok().flatten()?;
        drag_subject(&handle.get_attribute(DRAG_KIND_ATTR)?, &handle.get_attribute(DRAG_ID_ATTR)?)
    }

    /// Whether the event started on a form control that keeps its own input.
    pub fn is_form_control(target: Option<web_sys::EventTarget>) -> bool {
        target
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("input, textarea, select, button").ok().flatten())
            .is_some()
    }

    /// Current page scroll.
    pub fn window_scroll() -> Point {
        let Some(window) = web_sys::window() else {
            return Point::default();
        };
        Point::new(window.scroll_x().unwrap_or(0.0), window.scroll_y().unwrap_or(0.0))
    }

    /// Origin plus path of the current page, without query or fragment.
    pub fn page_base_url() -> String {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return String::new();
        };
        format!("{}{}", location.origin().unwrap_or_default(), location.pathname().unwrap_or_default())
    }

    /// Save `contents` as a file through a temporary object URL.
    pub fn download_text(filename: &str, mime: &str, contents: &str) -> Result<(), String> {
        let parts = js_sys::Array::of1(&JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(|e| format!("{e:?}"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;
        let result = download_url(filename, &url);
        let _ = web_sys::Url::revoke_object_url(&url);
        result
    }

    /// Save a `data:` or object URL as `filename` through a temporary anchor.
    pub fn download_url(filename: &str, url: &str) -> Result<(), String> {
        let document = web_sys::window().and_then(|w| w.document()).ok_or("no document")?;
        let anchor = document
            .create_element("a")
            .map_err(|e| format!("{e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor cast failed".to_owned())?;
        anchor.set_href(url);
        anchor.set_download(filename);
        anchor.click();
        Ok(())
    }

    /// Write `text` to the system clipboard.
    pub async fn copy_text(text: &str) -> Result<(), String> {
        let clipboard = web_sys::window()
            .and_then(|w| w.navigator().clipboard())
            .ok_or("clipboard unavailable")?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
}

#[cfg(feature = "csr")]
pub use browser::*;
