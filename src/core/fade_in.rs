//! Fade-in reveal for page sections
//!
//! Sections start transparent and shifted down. The host watches them with a visibility
//! observer and forwards every entry to [`FadeInBinder::on_intersection`]. Observation is
//! never stopped; the revealed end state is idempotent, so a section never hides again.

use std::rc::Rc;

use crate::core::config::FadeInConfig;
use crate::core::dom::Dom;

pub struct FadeInBinder<D: Dom> {
    dom: Rc<D>,
    config: Rc<FadeInConfig>,
    sections: Vec<D::Node>,
}

impl<D: Dom> FadeInBinder<D> {
    /// Hide every section and prepare its transition.
    pub fn bind(dom: Rc<D>, config: Rc<FadeInConfig>) -> Self {
        let sections = dom.query_selector_all(&config.section_selector);
        for section in &sections {
            dom.set_style(section, "opacity", "0");
            dom.set_style(section, "transform", &config.hidden_transform);
            dom.set_style(section, "transition", &config.transition);
        }
        Self {
            dom,
            config,
            sections,
        }
    }

    /// Sections the host should observe
    pub fn sections(&self) -> &[D::Node] {
        &self.sections
    }

    /// Visibility threshold the observer should use
    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Observer root margin in CSS syntax
    pub fn root_margin(&self) -> &str {
        &self.config.root_margin
    }

    pub fn on_intersection(&self, section: &D::Node, is_intersecting: bool) {
        if is_intersecting {
            self.reveal(section);
        }
    }

    /// Reveal every section at once, for hosts that cannot observe visibility.
    pub fn reveal_all(&self) {
        for section in &self.sections {
            self.reveal(section);
        }
    }

    fn reveal(&self, section: &D::Node) {
        self.dom.set_style(section, "opacity", "1");
        self.dom
            .set_style(section, "transform", &self.config.visible_transform);
    }
}
