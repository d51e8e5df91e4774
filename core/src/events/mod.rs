//! Change feed delivering new result snapshots to subscribed tables.
//!
//! The feed makes no assumption about what produces notifications; it only
//! guarantees that they are delivered one at a time, in registration order,
//! synchronously on the caller's execution context. A listener runs to
//! completion before the next listener (or the next notification) runs.

use tracing::trace;

use crate::result::SimResultData;

/// A subscriber callback. `None` means "no result data" and must clear any
/// derived state built from a previous snapshot.
pub type ResultListener = Box<dyn FnMut(Option<&SimResultData>)>;

/// Synchronous fan-out of result-change notifications.
#[derive(Default)]
pub struct ResultsEmitter {
    listeners: Vec<ResultListener>,
}

impl ResultsEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners are registered once, at table
    /// construction, and live as long as the emitter.
    pub fn subscribe(&mut self, listener: impl FnMut(Option<&SimResultData>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver one notification to every listener, in registration order.
    pub fn emit(&mut self, data: Option<&SimResultData>) {
        trace!(
            listeners = self.listeners.len(),
            has_data = data.is_some(),
            "dispatching result notification"
        );
        for listener in &mut self.listeners {
            listener(data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_delivery_in_registration_order() {
        let seen: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(vec![]));
        let mut emitter = ResultsEmitter::new();
        for tag in [1u8, 2, 3] {
            let seen = Rc::clone(&seen);
            emitter.subscribe(move |_| seen.borrow_mut().push(tag));
        }
        emitter.emit(None);
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_each_notification_reaches_all_listeners() {
        let count = Rc::new(RefCell::new(0u32));
        let mut emitter = ResultsEmitter::new();
        for _ in 0..2 {
            let count = Rc::clone(&count);
            emitter.subscribe(move |_| *count.borrow_mut() += 1);
        }
        emitter.emit(None);
        emitter.emit(None);
        assert_eq!(*count.borrow(), 4);
    }
}
