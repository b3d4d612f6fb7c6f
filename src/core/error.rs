//! Host error type shared by the binders and their hosts.

/// Failure reported by the host platform while mutating the document or registering callbacks.
///
/// Binders never propagate these past their own boundary; they log and carry on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    #[error("failed to create <{tag}> element: {reason}")]
    CreateElement { tag: String, reason: String },

    #[error("document has no <head> to attach styles to")]
    MissingHead,

    #[error("failed to schedule task: {0}")]
    Schedule(String),

    #[error("failed to attach `{event}` listener: {reason}")]
    Listener { event: String, reason: String },

    #[error("failed to create visibility observer: {0}")]
    Observer(String),

    #[error("no global `{0}` available")]
    MissingGlobal(&'static str),
}

