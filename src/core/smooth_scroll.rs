//! Smooth scrolling for in-page anchors

use std::rc::Rc;

use crate::core::config::NavigationConfig;
use crate::core::dom::{Dom, Navigation};
use crate::core::menu::MobileMenu;

pub struct SmoothScrollBinder<D: Dom> {
    dom: Rc<D>,
    menu: MobileMenu<D>,
    anchors: Vec<D::Node>,
}

impl<D: Dom> SmoothScrollBinder<D> {
    /// Collect every in-page anchor currently in the document.
    pub fn bind(dom: Rc<D>, config: Rc<NavigationConfig>) -> Self {
        let anchors = dom.query_selector_all(&config.anchor_selector);
        let menu = MobileMenu::new(dom.clone(), config);
        Self { dom, menu, anchors }
    }

    /// Anchors the host should attach click handlers to
    pub fn anchors(&self) -> &[D::Node] {
        &self.anchors
    }

    /// Handle a click on one of the bound anchors.
    ///
    /// Scrolls to the fragment target when it exists, closing the mobile menu first.
    /// A bare `#` or a fragment that names no element leaves the browser default alone.
    pub fn on_anchor_click(&self, anchor: &D::Node) -> Navigation {
        let Some(href) = self.dom.attribute(anchor, "href") else {
            return Navigation::Proceed;
        };
        let Some(fragment) = href.strip_prefix('#').filter(|f| !f.is_empty()) else {
            return Navigation::Proceed;
        };
        let Some(target) = self.dom.element_by_id(fragment) else {
            return Navigation::Proceed;
        };

        self.menu.close_if_open();
        self.dom.scroll_into_view(&target);
        Navigation::Suppress
    }
}
