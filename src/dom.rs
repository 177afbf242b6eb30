use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element};

use crate::error::DomError;

pub fn document() -> Option<Document> {
    window()?.document()
}

/// Text of an element such as an embedded `<script type="application/json">`.
pub fn embedded_text(id: &str) -> Option<String> {
    document()?.get_element_by_id(id)?.text_content()
}

/// Looks up `#id` and casts it to the expected element type.
pub fn require<T: JsCast>(id: &str, expected: &'static str) -> Result<T, DomError> {
    let doc = document().ok_or(DomError::NoDocument)?;
    let el = doc
        .get_element_by_id(id)
        .ok_or_else(|| DomError::Missing(id.to_string()))?;
    el.dyn_into::<T>().map_err(|_| DomError::WrongType {
        id: id.to_string(),
        expected,
    })
}

/// Walks up from an event target to the nearest element matching `selector`.
pub fn closest(target: Option<web_sys::EventTarget>, selector: &str) -> Option<Element> {
    let el = target?.dyn_into::<Element>().ok()?;
    el.closest(selector).ok().flatten()
}
