//! Scroll and resize notifications with scoped subscriptions.
//!
//! [`ViewportEvents`] is a single-threaded hub. Subscribing returns a
//! [`Subscription`] guard; the listener stays registered exactly as long as
//! the guard lives, so teardown releases it on every exit path.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// Opaque handle for a scrollable container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(pub u64);

/// What a listener follows for scroll events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollSource {
    /// The top-level window.
    Window,
    /// A designated scroll container.
    Container(ContainerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    Scroll(ScrollSource),
    /// Window resize. Delivered to every listener regardless of source.
    Resize,
}

impl ViewportEvent {
    fn reaches(&self, source: ScrollSource) -> bool {
        match self {
            Self::Scroll(scrolled) => *scrolled == source,
            Self::Resize => true,
        }
    }
}

type Listener = Rc<RefCell<dyn FnMut(ViewportEvent)>>;

struct Registration {
    id: u64,
    source: ScrollSource,
    listener: Listener,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    registrations: Vec<Registration>,
}

impl Registry {
    fn is_registered(&self, id: u64) -> bool {
        self.registrations.iter().any(|r| r.id == id)
    }
}

/// Event hub shared by every card of one view. Cloning shares the same hub.
#[derive(Clone, Default)]
pub struct ViewportEvents {
    registry: Rc<RefCell<Registry>>,
}

impl ViewportEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `source` scrolls and all resizes.
    pub fn subscribe(
        &self,
        source: ScrollSource,
        listener: impl FnMut(ViewportEvent) + 'static,
    ) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.registrations.push(Registration {
            id,
            source,
            listener: Rc::new(RefCell::new(listener)),
        });
        debug!(id, ?source, "viewport listener acquired");
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every listener it reaches. Returns how many ran.
    ///
    /// Listeners may subscribe or release during delivery. One released by an
    /// earlier listener in the same dispatch is skipped, and a listener that
    /// re-enters `dispatch` is not run recursively.
    pub fn dispatch(&self, event: ViewportEvent) -> usize {
        let targets: Vec<(u64, Listener)> = self
            .registry
            .borrow()
            .registrations
            .iter()
            .filter(|r| event.reaches(r.source))
            .map(|r| (r.id, Rc::clone(&r.listener)))
            .collect();

        let mut delivered = 0;
        for (id, listener) in targets {
            if !self.registry.borrow().is_registered(id) {
                continue;
            }
            let Ok(mut listener) = listener.try_borrow_mut() else {
                continue;
            };
            (&mut *listener)(event);
            delivered += 1;
        }
        trace!(?event, delivered, "viewport event dispatched");
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().registrations.len()
    }
}

/// Keeps one listener registered. Dropping it releases the listener.
#[must_use = "dropping a Subscription releases its listener immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Release now rather than at end of scope.
    pub fn release(self) {}

    fn detach(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = {
            let Ok(mut registry) = registry.try_borrow_mut() else {
                return;
            };
            let index = registry.registrations.iter().position(|r| r.id == self.id);
            index.map(|i| registry.registrations.remove(i))
        };
        // Dropped outside the borrow: the listener's captures may own subscriptions too.
        if removed.is_some() {
            debug!(id = self.id, "viewport listener released");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
