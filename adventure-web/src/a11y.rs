// Accessibility helpers

/// Id of the polite live region announcing progress changes.
pub const STATUS_REGION_ID: &str = "quest-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Injected once by the app shell so keyboard players can see which button
/// a press of Enter will hit.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #FFD700;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
pub fn set_status(msg: &str) {
    if let Some(node) =
        crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// Move keyboard focus to the element with `id`, if it exists and is focusable.
pub fn focus_by_id(id: &str) {
    use wasm_bindgen::JsCast;
    if let Some(el) = crate::dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_css_includes_sr_only_helper() {
        let css = visible_focus_css();
        assert!(css.contains(":focus-visible"));
        assert!(css.contains(".sr-only"));
    }
}
