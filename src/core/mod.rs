//! Host-independent landing page behavior
//!
//! Everything here is written against the [`Dom`] and [`Scheduler`] traits so it runs the same
//! in the browser and against the in-memory document used by the tests.

pub mod config;
pub mod dom;
pub mod error;
pub mod fade_in;
pub mod feedback;
pub mod menu;
pub mod navbar;
pub mod newsletter;
pub mod page;
pub mod scheduler;
pub mod smooth_scroll;
#[cfg(test)]
pub mod testing;
pub mod validation;

pub use config::LandingConfig;
pub use dom::{Dom, Navigation};
pub use error::HostError;
pub use feedback::FeedbackKind;
pub use page::LandingPage;
pub use scheduler::{Scheduler, TaskHandle, TaskSlot};
pub use validation::{is_valid_email, validate_email};
