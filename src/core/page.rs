//! All landing page binders bound against one document

use std::rc::Rc;

use leptos::logging::warn;

use crate::core::config::LandingConfig;
use crate::core::dom::Dom;
use crate::core::fade_in::FadeInBinder;
use crate::core::feedback::MESSAGE_ANIMATIONS;
use crate::core::navbar::NavbarBinder;
use crate::core::newsletter::NewsletterBinder;
use crate::core::scheduler::Scheduler;
use crate::core::smooth_scroll::SmoothScrollBinder;

/// The four independent binders of the landing page.
///
/// Each one is `None` (or empty) when its root element is missing; the others are unaffected.
pub struct LandingPage<D: Dom, S: Scheduler> {
    pub newsletter: Option<Rc<NewsletterBinder<D, S>>>,
    pub smooth_scroll: Rc<SmoothScrollBinder<D>>,
    pub navbar: Option<Rc<NavbarBinder<D>>>,
    pub fade_in: Option<Rc<FadeInBinder<D>>>,
}

impl<D, S> LandingPage<D, S>
where
    D: Dom + 'static,
    S: Scheduler + 'static,
{
    pub fn bind(dom: Rc<D>, scheduler: Rc<S>, config: &LandingConfig) -> Self {
        if let Err(e) = dom.inject_stylesheet(MESSAGE_ANIMATIONS) {
            warn!("Message animations unavailable: {}", e);
        }

        let navigation = Rc::new(config.navigation.clone());
        let newsletter = NewsletterBinder::bind(
            dom.clone(),
            scheduler,
            Rc::new(config.newsletter.clone()),
        );
        let smooth_scroll = Rc::new(SmoothScrollBinder::bind(dom.clone(), navigation.clone()));
        let navbar = NavbarBinder::bind(dom.clone(), navigation).map(Rc::new);
        let fade_in = config
            .fade_in
            .enabled
            .then(|| Rc::new(FadeInBinder::bind(dom, Rc::new(config.fade_in.clone()))));

        Self {
            newsletter,
            smooth_scroll,
            navbar,
            fade_in,
        }
    }

    /// Cancel every pending timer
    pub fn teardown(&self) {
        if let Some(newsletter) = &self.newsletter {
            newsletter.teardown();
        }
    }
}
