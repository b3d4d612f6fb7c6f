//! Transient feedback messages shown under the newsletter form
//!
//! The document holds at most one message: showing a new one removes whatever message node is
//! present and cancels the previous message's dismissal. Success messages leave on their own
//! after a display period and a short exit animation; error messages stay until replaced.

use std::rc::{Rc, Weak};

use leptos::logging::{error, warn};

use crate::core::config::NewsletterConfig;
use crate::core::dom::Dom;
use crate::core::scheduler::{Scheduler, TaskSlot};

/// Keyframes referenced by the message `animation` styles
pub const MESSAGE_ANIMATIONS: &str = r#"
@keyframes slideIn {
    from {
        opacity: 0;
        transform: translateY(-10px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

@keyframes slideOut {
    from {
        opacity: 1;
        transform: translateY(0);
    }
    to {
        opacity: 0;
        transform: translateY(-10px);
    }
}
"#;

const BASE_STYLES: &[(&str, &str)] = &[
    ("padding", "1rem"),
    ("margin-top", "1rem"),
    ("border-radius", "6px"),
    ("text-align", "center"),
    ("font-size", "0.95rem"),
    ("animation", "slideIn 0.3s ease"),
];

const EXIT_ANIMATION: &str = "slideOut 0.3s ease";

/// Class carried by every feedback message node
pub const MESSAGE_CLASS: &str = "form-message";
const MESSAGE_SELECTOR: &str = ".form-message";

/// Kind of feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }

    /// Background, text and border colors for this kind
    pub fn palette(self) -> [(&'static str, &'static str); 3] {
        match self {
            FeedbackKind::Success => [
                ("background-color", "#e8f5e9"),
                ("color", "#2e7d32"),
                ("border", "1px solid #c8e6c9"),
            ],
            FeedbackKind::Error => [
                ("background-color", "#ffebee"),
                ("color", "#c62828"),
                ("border", "1px solid #ffcdd2"),
            ],
        }
    }

    /// Only success messages dismiss themselves
    pub fn auto_dismiss(self) -> bool {
        matches!(self, FeedbackKind::Success)
    }
}

/// Owner of the single feedback message slot
pub struct FeedbackBanner<D: Dom, S: Scheduler> {
    dom: Rc<D>,
    scheduler: Rc<S>,
    config: Rc<NewsletterConfig>,
    dismissal: TaskSlot<S::Handle>,
}

impl<D, S> FeedbackBanner<D, S>
where
    D: Dom + 'static,
    S: Scheduler + 'static,
{
    pub fn new(dom: Rc<D>, scheduler: Rc<S>, config: Rc<NewsletterConfig>) -> Rc<Self> {
        Rc::new(Self {
            dom,
            scheduler,
            config,
            dismissal: TaskSlot::new(),
        })
    }

    /// Replace any message in the document with a new one placed right after `anchor`.
    ///
    /// Returns the new message node, or `None` if the host could not create it.
    pub fn show(
        self: &Rc<Self>,
        anchor: &D::Node,
        kind: FeedbackKind,
        text: &str,
    ) -> Option<D::Node> {
        self.dismissal.cancel();
        for existing in self.dom.query_selector_all(MESSAGE_SELECTOR) {
            self.dom.remove(&existing);
        }

        let class_name = format!("{MESSAGE_CLASS} {MESSAGE_CLASS}-{}", kind.as_str());
        let message = match self.dom.create_element("div", &class_name) {
            Ok(message) => message,
            Err(e) => {
                error!("Failed to show {} message: {}", kind.as_str(), e);
                return None;
            }
        };
        self.dom.set_text(&message, text);
        for (property, value) in BASE_STYLES.iter().chain(kind.palette().iter()) {
            self.dom.set_style(&message, property, value);
        }
        self.dom.insert_after(anchor, &message);

        if kind.auto_dismiss() {
            self.schedule_exit(message.clone());
        }
        Some(message)
    }

    /// Cancel a pending dismissal; the current message stays where it is.
    pub fn teardown(&self) {
        self.dismissal.cancel();
    }

    fn schedule_exit(self: &Rc<Self>, message: D::Node) {
        let banner = Rc::downgrade(self);
        let task = Box::new(move || {
            if let Some(banner) = banner.upgrade() {
                banner.dismissal.clear();
                banner.start_exit(message);
            }
        });
        match self.scheduler.schedule(self.config.success_display(), task) {
            Ok(handle) => self.dismissal.set(handle),
            Err(e) => warn!("Success message will not be dismissed: {}", e),
        }
    }

    fn start_exit(self: &Rc<Self>, message: D::Node) {
        self.dom.set_style(&message, "animation", EXIT_ANIMATION);

        let banner: Weak<Self> = Rc::downgrade(self);
        let exiting = message.clone();
        let task = Box::new(move || {
            if let Some(banner) = banner.upgrade() {
                banner.dismissal.clear();
                banner.dom.remove(&exiting);
            }
        });
        match self.scheduler.schedule(self.config.exit_animation(), task) {
            Ok(handle) => self.dismissal.set(handle),
            Err(e) => {
                warn!("Exit animation skipped: {}", e);
                self.dom.remove(&message);
            }
        }
    }
}
