//! Scoped ownership of an input-event subscription.
//!
//! The core never registers listeners itself. Whoever wires the pointer
//! source hands the handle over as a [`Subscription`]; disposing it (or
//! dropping it) detaches the source exactly once.

/// A registered event source that can be detached.
pub trait Detach {
    fn detach(&mut self);
}

pub struct Subscription {
    handle: Option<Box<dyn Detach>>,
}

impl Subscription {
    pub fn new(handle: impl Detach + 'static) -> Self {
        Self {
            handle: Some(Box::new(handle)),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Detach the source. Later calls do nothing.
    pub fn dispose(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.detach();
            log::debug!("[ripple] input subscription detached");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.is_attached())
            .finish()
    }
}
