use web_sys::{Document, Element, Window};

/// Id of the element the console mounts into when the host page provides one.
pub const APP_ROOT_ID: &str = "app";

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// The `#app` mount point; `None` lets the renderer fall back to `<body>`.
#[must_use]
pub fn app_root() -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(APP_ROOT_ID))
}
