//! Document abstraction the binders are written against
//!
//! Binders never reach for a global document. They receive an explicit handle implementing
//! [`Dom`], which is `web_sys` in the browser and an in-memory tree in tests.

use crate::core::error::HostError;

/// Whether the host should let the browser's default action for an event proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Leave the default action alone
    Proceed,
    /// Call `preventDefault` on the event
    Suppress,
}

impl Navigation {
    pub fn is_suppressed(self) -> bool {
        self == Navigation::Suppress
    }
}

/// Operations the binders need from the host document.
///
/// Lookups return `None` for missing elements. Mutations are infallible from the binder's
/// point of view; hosts log their own failures. Only element creation and stylesheet
/// injection report a [`HostError`], because the binder has to skip follow-up work.
pub trait Dom {
    /// Handle to an element in the document
    type Node: Clone;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// First element in document order matching `selector`
    fn query_selector(&self, selector: &str) -> Option<Self::Node>;

    /// All elements in document order matching `selector`
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Node>;

    /// First descendant of `root` matching `selector`
    fn query_within(&self, root: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Whether `node` is `ancestor` or one of its descendants
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Whether `node` is still attached to the document
    fn is_connected(&self, node: &Self::Node) -> bool;

    /// Current value of a form control
    fn value(&self, node: &Self::Node) -> String;

    fn set_value(&self, node: &Self::Node, value: &str);

    fn text(&self, node: &Self::Node) -> String;

    fn set_text(&self, node: &Self::Node, text: &str);

    fn is_disabled(&self, node: &Self::Node) -> bool;

    fn set_disabled(&self, node: &Self::Node, disabled: bool);

    /// Set one inline style property
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Create a detached element with the given class attribute
    fn create_element(&self, tag: &str, class_name: &str) -> Result<Self::Node, HostError>;

    /// Insert `node` directly after `reference`, as its next sibling
    fn insert_after(&self, reference: &Self::Node, node: &Self::Node);

    /// Detach `node` from the document. Detached nodes are ignored.
    fn remove(&self, node: &Self::Node);

    /// Dispatch a synthetic click, as if the user activated the element
    fn click(&self, node: &Self::Node);

    /// Animated scroll that aligns the element's top edge with the viewport
    fn scroll_into_view(&self, node: &Self::Node);

    /// Vertical scroll offset of the viewport in pixels
    fn scroll_y(&self) -> f64;

    /// Append a `<style>` element with `css` to the document head
    fn inject_stylesheet(&self, css: &str) -> Result<(), HostError>;
}
