//! # Catalog Observers
//!
//! Listeners the shop notifies whenever its catalog changes.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Observer (trait)                │
//! │  ├── notify()                                │
//! │  └── observer_name()                         │
//! └──────────────────────────────────────────────┘
//!                       ▲
//!          ┌────────────┴────────────┐
//!  ┌───────┴────────┐       ┌────────┴───────┐
//!  │CustomerListener│       │ LoggingObserver│
//!  └────────────────┘       └────────────────┘
//! ```
//!
//! Delivery is synchronous and follows registration order.

use tracing::{debug, info};

/// A listener for shop announcements.
pub trait Observer {
    /// Receive a message. Called once per announcement.
    fn notify(&self, message: &str);

    /// Name used in logs.
    fn observer_name(&self) -> &str {
        "observer"
    }
}

/// Type alias for a boxed observer (dynamic dispatch)
pub type BoxedObserver = Box<dyn Observer>;

/// Ordered set of observers owned by the shop
#[derive(Default)]
pub struct ObserverList {
    observers: Vec<BoxedObserver>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer at the end of the delivery order
    pub fn register(&mut self, observer: BoxedObserver) {
        debug!(observer = observer.observer_name(), "Observer registered");
        self.observers.push(observer);
    }

    /// Deliver `message` to every observer, in registration order
    pub fn notify_all(&self, message: &str) {
        for observer in &self.observers {
            debug!(observer = observer.observer_name(), text = message, "Notifying observer");
            observer.notify(message);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.observers.iter().map(|o| o.observer_name()))
            .finish()
    }
}

/// Observer that only writes announcements to the log
pub struct LoggingObserver;

impl Observer for LoggingObserver {
    fn notify(&self, message: &str) {
        info!("Catalog update: {}", message);
    }

    fn observer_name(&self) -> &str {
        "logging"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        id: &'static str,
        log: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl Observer for Recorder {
        fn notify(&self, message: &str) {
            self.log
                .borrow_mut()
                .push((self.id.to_string(), message.to_string()));
        }
    }

    #[test]
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut list = ObserverList::new();
        for id in ["a", "b", "c"] {
            list.register(Box::new(Recorder {
                id,
                log: Rc::clone(&log),
            }));
        }
        list.register(Box::new(LoggingObserver));

        list.notify_all("hello");

        let ids: Vec<String> = log.borrow().iter().map(|(id, _)| id.clone()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(log.borrow().iter().all(|(_, m)| m == "hello"));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_empty_list_is_noop() {
        let list = ObserverList::default();
        assert!(list.is_empty());
        list.notify_all("nobody listens");
    }
}
