//! Mobile navigation overlay shared by the smooth-scroll and navbar binders
//!
//! The overlay is opened and closed only through its toggle control, so whatever collapse
//! behavior the page wires to that control keeps working.

use std::rc::Rc;

use leptos::logging::warn;

use crate::core::config::NavigationConfig;
use crate::core::dom::Dom;

pub struct MobileMenu<D: Dom> {
    dom: Rc<D>,
    config: Rc<NavigationConfig>,
}

impl<D: Dom> MobileMenu<D> {
    pub fn new(dom: Rc<D>, config: Rc<NavigationConfig>) -> Self {
        Self { dom, config }
    }

    /// The overlay element, when it exists and is open
    fn open_overlay(&self) -> Option<D::Node> {
        self.dom
            .query_selector(&self.config.overlay_selector)
            .filter(|overlay| self.dom.has_class(overlay, &self.config.open_class))
    }

    pub fn is_open(&self) -> bool {
        self.open_overlay().is_some()
    }

    /// Close the overlay if it is open. Returns whether a close was triggered.
    pub fn close_if_open(&self) -> bool {
        if !self.is_open() {
            return false;
        }
        let Some(toggle) = self.toggle_control() else {
            return false;
        };
        self.dom.click(&toggle);
        true
    }

    /// Close the overlay when a click landed outside both the overlay and its toggle.
    ///
    /// A click without an element target counts as outside.
    pub fn close_on_outside_click(&self, target: Option<&D::Node>) -> bool {
        let Some(overlay) = self.open_overlay() else {
            return false;
        };
        let Some(toggle) = self.toggle_control() else {
            return false;
        };
        if let Some(target) = target {
            if self.dom.contains(&overlay, target) || self.dom.contains(&toggle, target) {
                return false;
            }
        }
        self.dom.click(&toggle);
        true
    }

    /// The toggle control. Only looked up while the overlay is open, where it must exist.
    fn toggle_control(&self) -> Option<D::Node> {
        let toggle = self.dom.query_selector(&self.config.toggle_selector);
        if toggle.is_none() {
            warn!(
                "Mobile menu is open but no `{}` control exists to close it",
                self.config.toggle_selector
            );
        }
        toggle
    }
}
