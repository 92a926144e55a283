//! Pointer-move listener registry.
//!
//! The host forwards every pointer move to a [`PointerHub`]. Each registered
//! listener mirrors the last client Y coordinate into its own cell. A
//! [`PointerSubscription`] deregisters its listener when dropped, so a chart
//! that reconfigures by replacing its subscription never holds more than one.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Debug, Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Rc<Cell<f64>>)>,
}

/// Document-level pointer listener registry, shared by the host and charts.
#[derive(Debug, Clone, Default)]
pub struct PointerHub {
    listeners: Rc<RefCell<Listeners>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener that writes the pointer Y into `target`.
    pub fn subscribe(&self, target: Rc<Cell<f64>>) -> PointerSubscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, target));

        PointerSubscription {
            listeners: Rc::downgrade(&self.listeners),
            id,
        }
    }

    /// Dispatch a pointer move to every registered listener.
    pub fn pointer_moved(&self, client_y: f64) {
        for (_, target) in &self.listeners.borrow().entries {
            target.set(client_y);
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

/// Handle to a registered pointer listener; deregisters on drop.
#[derive(Debug)]
pub struct PointerSubscription {
    listeners: Weak<RefCell<Listeners>>,
    id: u64,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_updates_cell() {
        let hub = PointerHub::new();
        let y = Rc::new(Cell::new(0.0));
        let _sub = hub.subscribe(Rc::clone(&y));

        hub.pointer_moved(42.5);
        assert_eq!(y.get(), 42.5);
    }

    #[test]
    fn test_drop_deregisters() {
        let hub = PointerHub::new();
        let y = Rc::new(Cell::new(0.0));

        let sub = hub.subscribe(Rc::clone(&y));
        assert_eq!(hub.listener_count(), 1);
        drop(sub);
        assert_eq!(hub.listener_count(), 0);

        hub.pointer_moved(10.0);
        assert_eq!(y.get(), 0.0);
    }

    #[test]
    fn test_replacing_subscription_keeps_one() {
        let hub = PointerHub::new();
        let y = Rc::new(Cell::new(0.0));

        let mut current = hub.subscribe(Rc::clone(&y));
        for _ in 0..5 {
            drop(current);
            current = hub.subscribe(Rc::clone(&y));
        }
        assert_eq!(hub.listener_count(), 1);
        drop(current);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outlives_hub() {
        let y = Rc::new(Cell::new(0.0));
        let sub = {
            let hub = PointerHub::new();
            hub.subscribe(Rc::clone(&y))
        };
        drop(sub);
    }
}
