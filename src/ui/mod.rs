//! Browser host for the landing page binders
//!
//! Wires the host-independent binders from [`crate::core`] to real DOM events, timers and an
//! `IntersectionObserver`, once the document has finished loading.

mod document;
mod listeners;
mod scheduler;

pub use document::WebDom;
pub use listeners::EventListeners;
pub use scheduler::{BrowserScheduler, BrowserTimeout};

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::{error, log, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::core::config::LandingConfig;
use crate::core::error::HostError;
use crate::core::fade_in::FadeInBinder;
use crate::core::page::LandingPage;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

thread_local! {
    static MOUNTED: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

/// Landing page bound to the live document.
///
/// Dropping it cancels pending timers, removes every listener and stops observing sections.
pub struct MountedPage {
    page: LandingPage<WebDom, BrowserScheduler>,
    listeners: EventListeners,
    observer: Option<(IntersectionObserver, ObserverCallback)>,
}

impl MountedPage {
    /// Observer watching the sections, if fade-in is active
    pub fn observer(&self) -> Option<&IntersectionObserver> {
        self.observer.as_ref().map(|(observer, _)| observer)
    }
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        self.page.teardown();
        if let Some((observer, _)) = &self.observer {
            observer.disconnect();
        }
    }
}

fn report(result: Result<(), HostError>) {
    if let Err(e) = result {
        warn!("{}", e);
    }
}

fn supports_intersection_observer(dom: &WebDom) -> bool {
    js_sys::Reflect::has(dom.window(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Bind every behavior to the document and attach the event listeners.
///
/// Listener failures only disable the affected behavior.
pub fn mount(dom: Rc<WebDom>, mut config: LandingConfig) -> MountedPage {
    if config.fade_in.enabled && !supports_intersection_observer(&dom) {
        warn!("IntersectionObserver unavailable, sections will not fade in");
        config.fade_in.enabled = false;
    }

    let page = LandingPage::bind(dom.clone(), Rc::new(BrowserScheduler), &config);
    let mut listeners = EventListeners::new();

    if let Some(newsletter) = &page.newsletter {
        let binder = newsletter.clone();
        report(listeners.listen(newsletter.form(), "submit", move |event: Event| {
            if binder.on_submit().is_suppressed() {
                event.prevent_default();
            }
        }));
    }

    for anchor in page.smooth_scroll.anchors() {
        let binder = page.smooth_scroll.clone();
        let link = anchor.clone();
        report(listeners.listen(anchor, "click", move |event: Event| {
            if binder.on_anchor_click(&link).is_suppressed() {
                event.prevent_default();
            }
        }));
    }

    if let Some(navbar) = &page.navbar {
        let binder = navbar.clone();
        report(listeners.listen(dom.window(), "scroll", move |_| binder.sync_scroll()));

        let binder = navbar.clone();
        report(listeners.listen(dom.document(), "click", move |event: Event| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok());
            binder.on_document_click(target.as_ref());
        }));
    }

    let observer = page.fade_in.as_ref().and_then(|fade_in| {
        observe_sections(fade_in)
            .inspect_err(|e| {
                warn!("{}", e);
                fade_in.reveal_all();
            })
            .ok()
    });

    log!(
        "Landing page mounted: {} listeners, newsletter={}, navbar={}, fade-in={}",
        listeners.len(),
        page.newsletter.is_some(),
        page.navbar.is_some(),
        observer.is_some()
    );

    MountedPage {
        page,
        listeners,
        observer,
    }
}

fn observe_sections(
    fade_in: &Rc<FadeInBinder<WebDom>>,
) -> Result<(IntersectionObserver, ObserverCallback), HostError> {
    let binder = fade_in.clone();
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    binder.on_intersection(&entry.target(), entry.is_intersecting());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(fade_in.threshold()));
    options.set_root_margin(fade_in.root_margin());
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| HostError::Observer(format!("{:?}", e)))?;

    for section in fade_in.sections() {
        observer.observe(section);
    }
    Ok((observer, callback))
}

/// Run `f` once the document has been parsed
fn when_ready(dom: &WebDom, f: impl FnOnce() + 'static) {
    if dom.document().ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(e) = dom
        .document()
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        error!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
}

/// Mount the landing page behaviors on the global document, replacing any earlier mount.
pub fn start() {
    let dom = match WebDom::from_globals() {
        Ok(dom) => Rc::new(dom),
        Err(e) => {
            error!("Landing page not mounted: {}", e);
            return;
        }
    };
    let ready_dom = dom.clone();
    when_ready(&dom, move || {
        let mounted = mount(ready_dom, LandingConfig::default());
        let previous = MOUNTED.with(|slot| slot.borrow_mut().replace(mounted));
        drop(previous);
    });
}

/// Unmount the landing page behaviors, if mounted.
pub fn teardown() {
    let mounted = MOUNTED.with(|slot| slot.borrow_mut().take());
    if mounted.is_some() {
        log!("Landing page unmounted");
    }
}
