//! Navbar shadow on scroll and closing the mobile menu on outside clicks

use std::rc::Rc;

use leptos::logging::debug_warn;

use crate::core::config::NavigationConfig;
use crate::core::dom::Dom;
use crate::core::menu::MobileMenu;

pub struct NavbarBinder<D: Dom> {
    dom: Rc<D>,
    config: Rc<NavigationConfig>,
    navbar: D::Node,
    menu: MobileMenu<D>,
}

impl<D: Dom> NavbarBinder<D> {
    /// Bind to the navbar, or return `None` when the page has none.
    pub fn bind(dom: Rc<D>, config: Rc<NavigationConfig>) -> Option<Self> {
        let Some(navbar) = dom.query_selector(&config.navbar_selector) else {
            debug_warn!("No `{}` found, navbar behavior disabled", config.navbar_selector);
            return None;
        };
        let menu = MobileMenu::new(dom.clone(), config.clone());
        Some(Self {
            dom,
            config,
            navbar,
            menu,
        })
    }

    pub fn navbar(&self) -> &D::Node {
        &self.navbar
    }

    /// Apply the shadow matching a vertical scroll offset
    pub fn on_scroll(&self, offset_y: f64) {
        let shadow = self.config.shadow_for_offset(offset_y);
        self.dom.set_style(&self.navbar, "box-shadow", shadow);
    }

    /// Apply the shadow for the document's current scroll offset
    pub fn sync_scroll(&self) {
        self.on_scroll(self.dom.scroll_y());
    }

    /// Close an open mobile menu when the click landed outside it and its toggle.
    pub fn on_document_click(&self, target: Option<&D::Node>) {
        self.menu.close_on_outside_click(target);
    }
}
