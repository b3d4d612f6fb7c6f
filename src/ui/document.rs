//! [`Dom`] implementation over the browser document

use leptos::logging::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::core::dom::Dom;
use crate::core::error::HostError;

/// The live document and its window
#[derive(Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Handle to the global window and document
    pub fn from_globals() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::MissingGlobal("window"))?;
        let document = window
            .document()
            .ok_or(HostError::MissingGlobal("document"))?;
        Ok(Self::new(window, document))
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl Dom for WebDom {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                warn!("Invalid selector `{}`: {}", selector, describe(e));
                None
            }
        }
    }

    fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                warn!("Invalid selector `{}`: {}", selector, describe(e));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn query_within(&self, root: &Element, selector: &str) -> Option<Element> {
        match root.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                warn!("Invalid selector `{}`: {}", selector, describe(e));
                None
            }
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(&**node))
    }

    fn is_connected(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn value(&self, node: &Element) -> String {
        match node.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.value(),
            None => node.get_attribute("value").unwrap_or_default(),
        }
    }

    fn set_value(&self, node: &Element, value: &str) {
        match node.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.set_value(value),
            None => {
                if let Err(e) = node.set_attribute("value", value) {
                    warn!("Failed to set value: {}", describe(e));
                }
            }
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn is_disabled(&self, node: &Element) -> bool {
        match node.dyn_ref::<HtmlButtonElement>() {
            Some(button) => button.disabled(),
            None => node.has_attribute("disabled"),
        }
    }

    fn set_disabled(&self, node: &Element, disabled: bool) {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
            return;
        }
        let result = if disabled {
            node.set_attribute("disabled", "")
        } else {
            node.remove_attribute("disabled")
        };
        if let Err(e) = result {
            warn!("Failed to toggle disabled state: {}", describe(e));
        }
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(element) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(e) = element.style().set_property(property, value) {
            warn!("Failed to set `{}`: {}", property, describe(e));
        }
    }

    fn create_element(&self, tag: &str, class_name: &str) -> Result<Element, HostError> {
        let element = self
            .document
            .create_element(tag)
            .map_err(|e| HostError::CreateElement {
                tag: tag.to_string(),
                reason: describe(e),
            })?;
        element.set_class_name(class_name);
        Ok(element)
    }

    fn insert_after(&self, reference: &Element, node: &Element) {
        if let Err(e) = reference.after_with_node_1(node) {
            warn!("Failed to insert element: {}", describe(e));
        }
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn click(&self, node: &Element) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            element.click();
        }
    }

    fn scroll_into_view(&self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn inject_stylesheet(&self, css: &str) -> Result<(), HostError> {
        let head = self.document.head().ok_or(HostError::MissingHead)?;
        let style = self.create_element("style", "")?;
        style.set_text_content(Some(css));
        head.append_child(&style)
            .map(|_| ())
            .map_err(|e| HostError::CreateElement {
                tag: "style".to_string(),
                reason: describe(e),
            })
    }
}
