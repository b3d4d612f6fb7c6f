//! Newsletter signup form
//!
//! Submitting the form never navigates. A malformed address gets an inline error right away.
//! A well-formed one puts the submit control into a busy state, and after a simulated request
//! delay the form shows a confirmation, clears the input and restores the control. No request
//! is actually sent.

use std::rc::{Rc, Weak};

use leptos::logging::{debug_warn, error, log, warn};

use crate::core::config::NewsletterConfig;
use crate::core::dom::{Dom, Navigation};
use crate::core::feedback::{FeedbackBanner, FeedbackKind};
use crate::core::scheduler::{Scheduler, TaskSlot};
use crate::core::validation::validate_email;

/// One accepted submission waiting for its simulated confirmation
#[derive(Clone)]
struct SubscriptionAttempt<N> {
    email: String,
    input: N,
    submit: N,
    original_label: String,
}

pub struct NewsletterBinder<D: Dom, S: Scheduler> {
    dom: Rc<D>,
    scheduler: Rc<S>,
    config: Rc<NewsletterConfig>,
    form: D::Node,
    feedback: Rc<FeedbackBanner<D, S>>,
    pending: TaskSlot<S::Handle>,
}

impl<D, S> NewsletterBinder<D, S>
where
    D: Dom + 'static,
    S: Scheduler + 'static,
{
    /// Bind to the newsletter form, or return `None` when the page has no such form.
    pub fn bind(dom: Rc<D>, scheduler: Rc<S>, config: Rc<NewsletterConfig>) -> Option<Rc<Self>> {
        let Some(form) = dom.element_by_id(&config.form_id) else {
            debug_warn!("No #{} form found, newsletter disabled", config.form_id);
            return None;
        };
        let feedback = FeedbackBanner::new(dom.clone(), scheduler.clone(), config.clone());
        Some(Rc::new(Self {
            dom,
            scheduler,
            config,
            form,
            feedback,
            pending: TaskSlot::new(),
        }))
    }

    pub fn form(&self) -> &D::Node {
        &self.form
    }

    /// Whether a simulated submission is waiting to complete
    pub fn is_submitting(&self) -> bool {
        self.pending.is_pending()
    }

    /// Handle a submit event. The default form submission is always suppressed.
    pub fn on_submit(self: &Rc<Self>) -> Navigation {
        let Some(input) = self.dom.query_within(&self.form, &self.config.email_selector) else {
            warn!("Newsletter form has no `{}` input", self.config.email_selector);
            return Navigation::Suppress;
        };
        let Some(submit) = self.dom.query_within(&self.form, &self.config.submit_selector) else {
            warn!("Newsletter form has no `{}` control", self.config.submit_selector);
            return Navigation::Suppress;
        };
        if self.dom.is_disabled(&submit) {
            return Navigation::Suppress;
        }

        let raw = self.dom.value(&input);
        let email = match validate_email(&raw) {
            Ok(email) => email.to_string(),
            Err(_) => {
                self.feedback.show(
                    &self.form,
                    FeedbackKind::Error,
                    &self.config.invalid_email_message,
                );
                return Navigation::Suppress;
            }
        };

        let original_label = self.dom.text(&submit);
        self.dom.set_text(&submit, &self.config.busy_label);
        self.dom.set_disabled(&submit, true);

        let attempt = SubscriptionAttempt {
            email,
            input,
            submit,
            original_label,
        };
        self.schedule_completion(attempt);
        Navigation::Suppress
    }

    /// Cancel the pending confirmation and message dismissal.
    pub fn teardown(&self) {
        self.pending.cancel();
        self.feedback.teardown();
    }

    fn schedule_completion(self: &Rc<Self>, attempt: SubscriptionAttempt<D::Node>) {
        let binder: Weak<Self> = Rc::downgrade(self);
        // Finished synchronously if the host cannot schedule the task
        let fallback = attempt.clone();
        let task = Box::new(move || {
            if let Some(binder) = binder.upgrade() {
                binder.pending.clear();
                binder.complete(attempt);
            }
        });
        match self.scheduler.schedule(self.config.submit_delay(), task) {
            Ok(handle) => self.pending.set(handle),
            Err(e) => {
                error!("Failed to schedule newsletter confirmation: {}", e);
                self.complete(fallback);
            }
        }
    }

    fn complete(self: &Rc<Self>, attempt: SubscriptionAttempt<D::Node>) {
        if !self.dom.is_connected(&self.form) {
            debug_warn!("Newsletter form detached before confirmation, skipping");
            return;
        }
        let domain = attempt.email.rsplit('@').next().unwrap_or_default();
        log!("Newsletter subscription confirmed for an address at {}", domain);
        self.feedback.show(
            &self.form,
            FeedbackKind::Success,
            &self.config.success_message,
        );
        self.dom.set_value(&attempt.input, "");
        self.dom.set_text(&attempt.submit, &attempt.original_label);
        self.dom.set_disabled(&attempt.submit, false);
    }
}
