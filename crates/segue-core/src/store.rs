use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

/// Observable cell: a cloneable handle to a shared mutable value with a
/// synchronous change-notification hook.
///
/// `Store` is `Rc`-based and therefore `!Send`/`!Sync`: every handle to a
/// given cell lives on the thread that created it. That is the API-boundary
/// form of the "reads and writes happen on the UI thread" contract.
pub struct Store<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    next_sub: SubId,
    subs: Vec<(SubId, Rc<dyn Fn()>)>,
}

impl<T> Store<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            next_sub: 0,
            subs: Vec::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, value: T) {
        {
            self.0.borrow_mut().value = value;
        }
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        {
            f(&mut self.0.borrow_mut().value);
        }
        self.notify();
    }

    /// Registers a change hook, invoked synchronously after every `set` or
    /// `update`. Hooks take no payload; pull the current value with
    /// [`Store::get`]. The returned id removes the hook via
    /// [`Store::unsubscribe`].
    pub fn subscribe(&self, f: impl Fn() + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        let id = inner.next_sub;
        inner.next_sub += 1;
        inner.subs.push((id, Rc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.0.borrow_mut().subs.retain(|(sid, _)| *sid != id);
    }

    // Hooks run with no cell borrow held, so they may read or write the
    // store re-entrantly. The list is snapshotted first; a hook that
    // subscribes or unsubscribes affects the next notification, not this one.
    fn notify(&self) {
        let subs: Vec<Rc<dyn Fn()>> = self
            .0
            .borrow()
            .subs
            .iter()
            .map(|(_, f)| f.clone())
            .collect();
        for f in subs {
            f();
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

pub fn store<T>(value: T) -> Store<T> {
    Store::new(value)
}
