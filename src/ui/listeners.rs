//! Owned DOM event listeners
//!
//! Closures registered through [`EventListeners`] stay alive as long as the set does and are
//! unregistered when it is dropped, instead of being leaked with `forget()`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::core::error::HostError;

struct Registration {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

#[derive(Default)]
pub struct EventListeners {
    registrations: Vec<Registration>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event` on `target`
    pub fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), HostError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| HostError::Listener {
                event: event.to_string(),
                reason: format!("{:?}", e),
            })?;
        self.registrations.push(Registration {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.registrations.len()
    }
}

impl Drop for EventListeners {
    fn drop(&mut self) {
        for registration in self.registrations.drain(..) {
            let _ = registration.target.remove_event_listener_with_callback(
                registration.event,
                registration.callback.as_ref().unchecked_ref(),
            );
        }
    }
}
